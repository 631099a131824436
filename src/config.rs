//! Credential resolution
//!
//! An optional process-wide default credential may be configured through the
//! environment. Precedence is resolved here, explicitly and once per planner
//! construction, never through implicit shared state.

use std::env;

/// Environment variable holding the process-wide default credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the credential for one call. A non-empty process default takes
/// precedence over the per-request value.
pub fn resolve_api_key(per_request: &str) -> Option<String> {
    resolve_api_key_from(env::var(API_KEY_ENV).ok().as_deref(), per_request)
}

fn resolve_api_key_from(default_key: Option<&str>, per_request: &str) -> Option<String> {
    default_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .or_else(|| Some(per_request.trim()).filter(|key| !key.is_empty()))
        .map(|key| key.to_string())
}

/// Whether a process-wide default credential is configured.
pub fn has_default_api_key() -> bool {
    env::var(API_KEY_ENV)
        .map(|key| !key.trim().is_empty())
        .unwrap_or(false)
}
