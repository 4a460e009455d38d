//! Connect flow state transitions
//!
//! The callback screen is a state machine evaluated once per page load:
//! `loading` -> one of `providerErrored`, `missingCode`, `configErrored`,
//! `exchangeErrored`, `succeeded`. The pre-network part of the transition
//! lives here as a pure function; the exchange call itself is performed by
//! the router using the step returned from [`classify`].

use crate::model::config::Config;

use super::types::CallbackQuery;

/// LinkedIn authorization endpoint
pub const AUTHORIZATION_ENDPOINT: &str = "https://www.linkedin.com/oauth/v2/authorization";

/// Path LinkedIn redirects back to after authorization
pub const CALLBACK_PATH: &str = "/linkedin/callback";

/// Requested OAuth scopes
pub const SCOPE: &str = "openid profile email";

/// Message shown when the callback carries neither code nor error
pub const MISSING_CODE_MESSAGE: &str = "No authorization code found in URL";

/// Build the LinkedIn authorization URL for the given page origin
pub fn authorize_url(client_id: &str, origin: &str) -> String {
    let redirect_uri = urlencoding::encode(&format!("{}{}", origin, CALLBACK_PATH)).into_owned();
    format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&scope={}",
        AUTHORIZATION_ENDPOINT,
        client_id,
        redirect_uri,
        urlencoding::encode(SCOPE),
    )
}

/// Terminal outcome reached without any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// LinkedIn reported an error instead of a code
    ProviderErrored { message: String },
    /// Neither code nor error present on the callback URL
    MissingCode { message: String },
    /// Backend URL is not configured, the code cannot be exchanged
    ConfigErrored,
}

/// Next step after classifying the callback query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackStep {
    Done(CallbackOutcome),
    /// A code is present and the backend is configured: exchange it
    Exchange { code: String, backend_url: String },
}

/// Classify the callback query into the next step
///
/// Checks are evaluated in order: provider error, missing code, missing
/// backend configuration. The outcomes are mutually exclusive.
pub fn classify(query: &CallbackQuery, config: &Config) -> CallbackStep {
    if let Some(error) = &query.error {
        let description = query.error_description.as_deref().unwrap_or("");
        return CallbackStep::Done(CallbackOutcome::ProviderErrored {
            message: format!("LinkedIn Error: {} - {}", error, description),
        });
    }

    let Some(code) = &query.code else {
        return CallbackStep::Done(CallbackOutcome::MissingCode {
            message: MISSING_CODE_MESSAGE.to_string(),
        });
    };

    match &config.backend_url {
        Some(backend_url) => CallbackStep::Exchange {
            code: code.clone(),
            backend_url: backend_url.clone(),
        },
        None => CallbackStep::Done(CallbackOutcome::ConfigErrored),
    }
}
