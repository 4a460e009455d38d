//! LinkedIn connect flow types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters LinkedIn appends to the callback redirect
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Profile returned by the backend exchange endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

/// Detail of a failed code exchange
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeFailure {
    /// Human-readable message shown on the error page
    pub message: String,
    /// Transport-level error message
    pub response_error: Option<String>,
    /// Upstream HTTP status, if a response was received
    pub response_status: Option<u16>,
    /// Upstream response body (parsed JSON, or the raw text as a string)
    pub response_data: Option<Value>,
}

/// Diagnostic snapshot rendered on callback error pages
///
/// Captured once when the callback is processed; exchange failure details
/// are merged in before rendering. The authorization code is never included
/// verbatim, only a redacted prefix.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSnapshot {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub backend_url: String,
    pub current_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Value>,
}

impl DebugSnapshot {
    /// Capture the snapshot for one callback page load
    pub fn capture(query: &CallbackQuery, backend_url: Option<&str>, current_url: &str) -> Self {
        Self {
            code: query.code.as_deref().map(redact_code),
            error: query.error.clone(),
            error_description: query.error_description.clone(),
            backend_url: backend_url.unwrap_or("Not set").to_string(),
            current_url: current_url.to_string(),
            response_error: None,
            response_status: None,
            response_data: None,
        }
    }

    /// Merge upstream details from a failed exchange
    pub fn merge_failure(&mut self, failure: &ExchangeFailure) {
        self.response_error = failure.response_error.clone();
        self.response_status = failure.response_status;
        self.response_data = failure.response_data.clone();
    }

    /// Pretty-printed JSON for the error page
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Redact an authorization code to its first 10 characters
fn redact_code(code: &str) -> String {
    format!("{}...", code.chars().take(10).collect::<String>())
}
