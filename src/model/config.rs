//! Runtime configuration resolved from the process environment

use std::env;

/// Environment variable holding the backend base URL (no trailing slash)
pub const BACKEND_URL_VAR: &str = "VITE_BACKEND_URL";

/// Environment variable holding the LinkedIn OAuth client ID
pub const CLIENT_ID_VAR: &str = "VITE_LINKEDIN_CLIENT_ID";

/// Read an environment variable, normalizing empty values to absent
pub fn env_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Get the backend base URL from the environment
pub fn backend_url() -> Option<String> {
    env_var(BACKEND_URL_VAR)
}

/// Get the LinkedIn client ID from the environment
pub fn linkedin_client_id() -> Option<String> {
    env_var(CLIENT_ID_VAR)
}

/// Application configuration
///
/// Both values are optional: a missing value surfaces as a configuration
/// error on the screen that needs it, not as a startup failure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend_url: Option<String>,
    pub linkedin_client_id: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            backend_url: backend_url(),
            linkedin_client_id: linkedin_client_id(),
        }
    }
}
