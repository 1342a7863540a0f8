// src/model/mod.rs
// ============================================================================
// Module: Gateway Models
// Description: Data-transfer records mirrored from the gateway's JSON schema.
// Purpose: Build request bodies and decode response bodies in suites.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Plain data-transfer records for the account gateway. `New*` types build
//! request bodies; the bare types decode response bodies. They carry no
//! invariants of their own: the gateway owns all business rules.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod foodq;
mod group;
mod institution;
mod users;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use foodq::FoodQuestion;
pub use foodq::FoodQuestionnaire;
pub use group::ChildrenGroup;
pub use group::NewChildrenGroup;
pub use institution::Institution;
pub use institution::NewInstitution;
pub use users::AccessToken;
pub use users::Application;
pub use users::Child;
pub use users::Credentials;
pub use users::Educator;
pub use users::Family;
pub use users::Gender;
pub use users::HealthProfessional;
pub use users::NewApplication;
pub use users::NewChild;
pub use users::NewEducator;
pub use users::NewFamily;
pub use users::NewHealthProfessional;
