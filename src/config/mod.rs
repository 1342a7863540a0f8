// src/config/mod.rs
// ============================================================================
// Module: Suite Configuration
// Description: Centralized configuration for the acceptance suite.
// Purpose: Provide typed access to gateway connection settings and defaults.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite configuration is read from environment variables and mapped into a
//! small typed structure reused by every test helper. Invalid values fail
//! closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::GatewayTestConfig;
pub use env::GatewayTestEnv;
pub use env::read_env_strict;
