// src/model/users.rs
// ============================================================================
// Module: User Models
// Description: Request and response records for the gateway's user types.
// Purpose: Build registration bodies and decode gateway echoes per role.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! One `New*` request record and one response record per user category. The
//! gateway echoes `institution_id` on some routes and a nested `institution`
//! on others, so response records carry both as optional fields. `password`
//! never appears in a response body.

use serde::Deserialize;
use serde::Serialize;

use super::group::ChildrenGroup;
use super::institution::Institution;

/// Credentials body for `POST /auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a credentials body.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Successful `POST /auth` response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// Bearer token for subsequent requests.
    pub access_token: String,
}

/// Child gender accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male child.
    Male,
    /// Female child.
    Female,
}

/// Request body for `POST /children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewChild {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Child gender.
    pub gender: Gender,
    /// Child age in years.
    pub age: u8,
    /// Institution the child belongs to.
    pub institution_id: String,
}

/// Child record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Child gender.
    pub gender: Gender,
    /// Child age in years.
    pub age: u8,
    /// Institution id when the route echoes the flat form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Institution record when the route echoes the nested form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
}

/// Request body for `POST /educators`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEducator {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Institution the educator belongs to.
    pub institution_id: String,
}

/// Educator record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Educator {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Institution id when the route echoes the flat form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Institution record when the route echoes the nested form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
    /// Groups owned by this educator, when the route includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_groups: Option<Vec<ChildrenGroup>>,
}

/// Request body for `POST /healthprofessionals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHealthProfessional {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Institution the health professional belongs to.
    pub institution_id: String,
}

/// Health-professional record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfessional {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Institution id when the route echoes the flat form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Institution record when the route echoes the nested form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
    /// Groups owned by this health professional, when the route includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_groups: Option<Vec<ChildrenGroup>>,
}

/// Request body for `POST /families`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFamily {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Ids of the children associated with the family.
    pub children: Vec<String>,
    /// Institution the family belongs to.
    pub institution_id: String,
}

/// Family record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Children associated with the family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,
    /// Institution id when the route echoes the flat form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Institution record when the route echoes the nested form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
}

/// Request body for `POST /applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    /// Unique username.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Human-readable application name.
    pub application_name: String,
    /// Institution the application belongs to.
    pub institution_id: String,
}

/// Application record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Unique username.
    pub username: String,
    /// Human-readable application name.
    pub application_name: String,
    /// Institution id when the route echoes the flat form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Institution record when the route echoes the nested form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
}
