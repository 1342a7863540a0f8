// src/model/institution.rs
// ============================================================================
// Module: Institution Models
// Description: Request and response records for `/institutions`.
// Purpose: Build institution bodies and decode gateway echoes.
// Dependencies: serde
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

/// Request body for `POST /institutions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInstitution {
    /// Institution category, for example `Institute of Education`.
    #[serde(rename = "type")]
    pub institution_type: String,
    /// Institution display name; unique together with the type.
    pub name: String,
    /// Optional street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Optional latitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Optional longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl NewInstitution {
    /// Creates a minimal institution body with only the required fields.
    #[must_use]
    pub fn new(institution_type: &str, name: &str) -> Self {
        Self {
            institution_type: institution_type.to_string(),
            name: name.to_string(),
            address: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Attaches an address to the body.
    #[must_use]
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    /// Attaches coordinates to the body.
    #[must_use]
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// Institution record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Institution category.
    #[serde(rename = "type")]
    pub institution_type: String,
    /// Institution display name.
    pub name: String,
    /// Optional street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Optional latitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Optional longitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
