// src/rest/endpoint.rs
// ============================================================================
// Module: Endpoint Composition
// Description: Joins gateway endpoint paths onto the configured base URL.
// Purpose: Keep any base path (for example `/v1`) in composed request URLs.
// Dependencies: url
// ============================================================================

use url::Url;

/// Joins an endpoint path onto a base URL, preserving the base path.
///
/// `Url::join` treats a leading-slash path as absolute and would replace the
/// base path entirely, so the base is normalized to end with `/` and the
/// endpoint path is joined as a relative reference. A path may carry its own
/// query string.
pub fn join_endpoint(base: &Url, path: &str) -> Result<Url, String> {
    let mut joinable = base.clone();
    if !joinable.path().ends_with('/') {
        let with_slash = format!("{}/", joinable.path());
        joinable.set_path(&with_slash);
    }
    joinable
        .join(path.trim_start_matches('/'))
        .map_err(|err| format!("invalid endpoint path {path}: {err}"))
}
