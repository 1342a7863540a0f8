// src/config/env.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment-backed configuration for the acceptance suite.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default gateway origin when no override is provided.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8081";
/// Default seeded admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Default seeded admin password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for acceptance-suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayTestEnv {
    /// Optional gateway origin override.
    BaseUrl,
    /// Optional admin username override.
    AdminUsername,
    /// Optional admin password override.
    AdminPassword,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact run root override.
    RunRoot,
    /// Accept self-signed gateway TLS (`true`/`false` or `1`/`0`).
    AcceptInvalidCerts,
}

impl GatewayTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "ACCOUNT_GATEWAY_BASE_URL",
            Self::AdminUsername => "ACCOUNT_GATEWAY_ADMIN_USERNAME",
            Self::AdminPassword => "ACCOUNT_GATEWAY_ADMIN_PASSWORD",
            Self::TimeoutSeconds => "ACCOUNT_GATEWAY_TIMEOUT_SEC",
            Self::RunRoot => "ACCOUNT_GATEWAY_RUN_ROOT",
            Self::AcceptInvalidCerts => "ACCOUNT_GATEWAY_ACCEPT_INVALID_CERTS",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed acceptance-suite configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayTestConfig {
    /// Gateway origin the suites talk to.
    pub base_url: String,
    /// Username of the gateway's seeded admin account.
    pub admin_username: String,
    /// Password of the gateway's seeded admin account.
    pub admin_password: String,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// Accept the gateway's self-signed TLS certificate.
    pub accept_invalid_certs: bool,
}

impl Default for GatewayTestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            timeout: None,
            run_root: None,
            accept_invalid_certs: false,
        }
    }
}

impl GatewayTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout or boolean
    /// value).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(GatewayTestEnv::BaseUrl.as_str())?
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |value| value.trim_end_matches('/').to_string());
        let admin_username = read_env_nonempty(GatewayTestEnv::AdminUsername.as_str())?
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());
        let admin_password = read_env_nonempty(GatewayTestEnv::AdminPassword.as_str())?
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());
        let timeout = read_env_nonempty(GatewayTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(GatewayTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(GatewayTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let accept_invalid_certs = parse_bool_env(
            GatewayTestEnv::AcceptInvalidCerts.as_str(),
            read_env_nonempty(GatewayTestEnv::AcceptInvalidCerts.as_str())?,
        )?;
        Ok(Self {
            base_url,
            admin_username,
            admin_password,
            timeout,
            run_root,
            accept_invalid_certs,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
