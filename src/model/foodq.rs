// src/model/foodq.rs
// ============================================================================
// Module: Food Questionnaire Models
// Description: Response records for the `/foodqs` survey listing.
// Purpose: Decode questionnaire templates relayed from the quiz service.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Questionnaire templates are owned by the external quiz service; the
//! gateway only relays them. Template fields beyond `id` are optional so the
//! records tolerate template evolution on the quiz side.

use serde::Deserialize;
use serde::Serialize;

/// Food-habit questionnaire record from `GET /foodqs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodQuestionnaire {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Child the questionnaire is scoped to, when filtered or answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_id: Option<String>,
    /// Template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Template questions, when the listing expands them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<FoodQuestion>,
}

/// One question within a questionnaire template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodQuestion {
    /// Question wording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Offered answer options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<String>,
}
