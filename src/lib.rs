// src/lib.rs
// ============================================================================
// Module: Account Gateway System Tests Library
// Description: Shared configuration, models, and contract data for the suite.
// Purpose: Provide common utilities for acceptance-test binaries.
// Dependencies: serde, serde_json, url
// ============================================================================

//! ## Overview
//! This crate hosts the shared pieces used by the acceptance-test binaries in
//! `tests/`: environment-backed configuration, the gateway's data-transfer
//! records, and the gateway response contract (error catalog and list-query
//! parameters). The gateway itself is an external collaborator; nothing here
//! implements its business rules.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod model;
pub mod rest;
