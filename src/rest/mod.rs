// src/rest/mod.rs
// ============================================================================
// Module: Gateway Response Contract
// Description: Error catalog and list-query parameters as data.
// Purpose: Give suites one source of truth for contract assertions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The gateway's response contract, expressed as data the suites assert
//! against: the structured error body with its fixed expected-exception
//! catalog, and the `sort`/`page`/`limit`/`fields` list-query parameters.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod endpoint;
mod errors;
mod query;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use endpoint::join_endpoint;
pub use errors::ApiError;
pub use errors::catalog;
pub use query::ListQuery;
