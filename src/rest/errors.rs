// src/rest/errors.rs
// ============================================================================
// Module: Expected-Exception Catalog
// Description: Structured error bodies returned by the gateway.
// Purpose: Assert 400/401/403/404/409 responses by exact equality.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The gateway reports every failure as `{code, message, description}`. The
//! catalog below fixes the expected bodies so suites assert equality instead
//! of re-deriving strings at each call site.

use serde::Deserialize;
use serde::Serialize;

/// Structured error body returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Stable machine-readable message.
    pub message: String,
    /// Human-readable description.
    pub description: String,
}

impl ApiError {
    /// Creates an error body from its parts.
    #[must_use]
    pub fn new(code: u16, message: &str, description: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            description: description.to_string(),
        }
    }
}

/// Fixed expected-exception bodies asserted by the suites.
pub mod catalog {
    use super::ApiError;

    /// 401 for an absent or malformed bearer token.
    #[must_use]
    pub fn auth_required() -> ApiError {
        ApiError::new(
            401,
            "UNAUTHORIZED",
            "Authentication failed for lack of valid authentication credentials.",
        )
    }

    /// 401 for wrong username or password on `POST /auth`.
    #[must_use]
    pub fn invalid_credentials() -> ApiError {
        ApiError::new(401, "UNAUTHORIZED", "Invalid username or password!")
    }

    /// 403 for an authenticated actor without sufficient permissions.
    #[must_use]
    pub fn forbidden() -> ApiError {
        ApiError::new(403, "FORBIDDEN", "Authorization failed due to insufficient permissions.")
    }

    /// 400 for a malformed resource id in the path.
    #[must_use]
    pub fn invalid_id() -> ApiError {
        ApiError::new(
            400,
            "INVALID_ID",
            "A 24-byte hex string similar to this: 507f191e810c19729de860ea is expected.",
        )
    }

    /// 409 for a registration colliding with existing unique data.
    #[must_use]
    pub fn duplicate() -> ApiError {
        ApiError::new(409, "DUPLICATE", "A registration with the same unique data already exists!")
    }

    /// 404 with a per-resource description.
    #[must_use]
    pub fn not_found(description: &str) -> ApiError {
        ApiError::new(404, "NOT_FOUND", description)
    }

    /// 400 for a user registration naming an unregistered institution.
    #[must_use]
    pub fn institution_register_required() -> ApiError {
        ApiError::new(
            400,
            "INSTITUTION_REGISTER_REQUIRED",
            "The institution provided does not have a registration.",
        )
    }

    /// 400 for deleting an institution that still has associated users.
    #[must_use]
    pub fn institution_has_association() -> ApiError {
        ApiError::new(
            400,
            "HAS_ASSOCIATION",
            "The institution is associated with one or more users.",
        )
    }

    /// 400 for attempting to update `password` through a user PATCH.
    #[must_use]
    pub fn password_not_allowed() -> ApiError {
        ApiError::new(400, "PASSWORD_NOT_ALLOWED", "This parameter could not be updated: password.")
    }

    /// 400 for associating a child that has no registration.
    #[must_use]
    pub fn association_failure() -> ApiError {
        ApiError::new(
            400,
            "ASSOCIATION_FAILURE",
            "The association could not be performed because the child does not have a registration.",
        )
    }

    /// 400 listing the required fields missing from a request body.
    #[must_use]
    pub fn required_fields(fields: &[&str]) -> ApiError {
        ApiError::new(
            400,
            "REQUIRED_FIELDS",
            &format!("Required fields were not provided: {}.", fields.join(", ")),
        )
    }
}
