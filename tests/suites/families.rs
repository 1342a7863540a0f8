// tests/suites/families.rs
// ============================================================================
// Module: Family Tests
// Description: Acceptance tests for `/families` and child association.
// Purpose: Validate own-record access and associate/dissociate flows.
// Dependencies: helpers
// ============================================================================

//! Family acceptance tests.

use account_system_tests::config::GatewayTestConfig;
use account_system_tests::model::Child;
use account_system_tests::model::Family;
use account_system_tests::model::Gender;
use account_system_tests::model::NewChild;
use account_system_tests::model::NewFamily;
use account_system_tests::rest::catalog;
use helpers::actors;
use helpers::actors::ACTOR_PASSWORD;
use helpers::actors::RoleActors;
use helpers::artifacts::TestReporter;
use serde_json::json;

use crate::helpers;

/// Id that is well-formed but unknown to the gateway.
const UNKNOWN_ID: &str = "507f191e810c19729de860ea";

#[tokio::test(flavor = "multi_thread")]
async fn family_reads_own_record() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("family_reads_own_record")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-own").await?;

    let family: Family = actors
        .family_client
        .get(&format!("/families/{}", actors.family.id))
        .await?
        .expect_status(200)?
        .decode()?;
    let children = family.children.ok_or("family record carried no children")?;
    if !children.iter().any(|child| child.id == actors.child.id) {
        return Err("seeded child missing from the family record".into());
    }

    reporter.finish(
        "pass",
        vec!["family read its own record with the associated child".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn family_cannot_read_another_family() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("family_cannot_read_another_family")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-other").await?;

    let other_username = format!("other-family-{}", actors::unique_suffix());
    let other: Family = actors
        .admin
        .post(
            "/families",
            &NewFamily {
                username: other_username,
                password: ACTOR_PASSWORD.to_string(),
                children: vec![actors.child.id.clone()],
                institution_id: actors.institution.id.clone(),
            },
        )
        .await?
        .expect_status(201)?
        .decode()?;

    let error = actors
        .family_client
        .get(&format!("/families/{}", other.id))
        .await?
        .expect_status(403)?
        .api_error()?;
    if error != catalog::forbidden() {
        return Err(format!("unexpected error body: {error:?}").into());
    }

    reporter.finish(
        "pass",
        vec!["family token was denied another family's record".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn family_updates_own_username() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("family_updates_own_username")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-patch").await?;

    let renamed = format!("family-renamed-{}", actors::unique_suffix());
    let updated: Family = actors
        .family_client
        .patch(&format!("/families/{}", actors.family.id), &json!({"username": renamed}))
        .await?
        .expect_status(200)?
        .decode()?;
    if updated.username != renamed {
        return Err("family patch did not echo the new username".into());
    }

    reporter.finish(
        "pass",
        vec!["family updated its own record".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_associates_and_dissociates_child() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("admin_associates_and_dissociates_child")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-assoc").await?;

    let extra: Child = actors
        .admin
        .post(
            "/children",
            &NewChild {
                username: format!("assoc-child-{}", actors::unique_suffix()),
                password: ACTOR_PASSWORD.to_string(),
                gender: Gender::Male,
                age: 11,
                institution_id: actors.institution.id.clone(),
            },
        )
        .await?
        .expect_status(201)?
        .decode()?;

    let association_path = format!("/families/{}/children/{}", actors.family.id, extra.id);
    let family: Family = actors
        .admin
        .post(&association_path, &json!({}))
        .await?
        .expect_status(200)?
        .decode()?;
    let children = family.children.ok_or("association echo carried no children")?;
    if !children.iter().any(|child| child.id == extra.id) {
        return Err("associated child missing from the family echo".into());
    }

    actors.admin.delete(&association_path).await?.expect_status(204)?;
    let family: Family = actors
        .admin
        .get(&format!("/families/{}", actors.family.id))
        .await?
        .expect_status(200)?
        .decode()?;
    let children = family.children.unwrap_or_default();
    if children.iter().any(|child| child.id == extra.id) {
        return Err("dissociated child still present in the family record".into());
    }

    reporter.finish(
        "pass",
        vec!["child association and dissociation round-tripped".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn associating_unknown_child_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("associating_unknown_child_fails")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-assoc-bad").await?;

    let error = actors
        .admin
        .post(&format!("/families/{}/children/{UNKNOWN_ID}", actors.family.id), &json!({}))
        .await?
        .expect_status(400)?
        .api_error()?;
    if error != catalog::association_failure() {
        return Err(format!("unexpected error body: {error:?}").into());
    }

    reporter.finish(
        "pass",
        vec!["unknown child association returned the failure body".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_updates_family_via_users_surface() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("admin_updates_family_via_users_surface")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-users-patch").await?;

    let renamed = format!("family-admin-renamed-{}", actors::unique_suffix());
    let updated: Family = actors
        .admin
        .patch(&format!("/users/families/{}", actors.family.id), &json!({"username": renamed}))
        .await?
        .expect_status(200)?
        .decode()?;
    if updated.username != renamed {
        return Err("users-surface patch did not echo the new username".into());
    }

    reporter.finish(
        "pass",
        vec!["admin updated the family through the users surface".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn educator_cannot_read_family() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("educator_cannot_read_family")?;
    let config = GatewayTestConfig::load()?;
    let actors = RoleActors::seed(&config, "family-authz").await?;

    let error = actors
        .educator_client
        .get(&format!("/families/{}", actors.family.id))
        .await?
        .expect_status(403)?
        .api_error()?;
    if error != catalog::forbidden() {
        return Err(format!("unexpected error body: {error:?}").into());
    }

    reporter.finish(
        "pass",
        vec!["educator token was denied the family record".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_family_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("malformed_family_id_is_rejected")?;
    let config = GatewayTestConfig::load()?;
    let admin = actors::admin_client(&config).await?;

    let error = admin.get("/families/123").await?.expect_status(400)?.api_error()?;
    if error != catalog::invalid_id() {
        return Err(format!("unexpected error body: {error:?}").into());
    }

    reporter.finish(
        "pass",
        vec!["malformed family id returned the invalid-id body".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}
