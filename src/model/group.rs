// src/model/group.rs
// ============================================================================
// Module: Children Group Models
// Description: Request and response records for children-group subresources.
// Purpose: Build group bodies for educators and health professionals.
// Dependencies: serde
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use super::users::Child;

/// Request body for `POST /{owner}/:id/children/groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewChildrenGroup {
    /// Group display name; unique per owner.
    pub name: String,
    /// Ids of the children in the group.
    pub children: Vec<String>,
    /// Optional school class label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_class: Option<String>,
}

impl NewChildrenGroup {
    /// Creates a group body for the given children.
    #[must_use]
    pub fn new(name: &str, children: &[String]) -> Self {
        Self {
            name: name.to_string(),
            children: children.to_vec(),
            school_class: None,
        }
    }

    /// Attaches a school class label to the body.
    #[must_use]
    pub fn with_school_class(mut self, school_class: &str) -> Self {
        self.school_class = Some(school_class.to_string());
        self
    }
}

/// Children-group record echoed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildrenGroup {
    /// Gateway-assigned resource id.
    pub id: String,
    /// Group display name.
    pub name: String,
    /// Children in the group, echoed as full records.
    pub children: Vec<Child>,
    /// Optional school class label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_class: Option<String>,
}
