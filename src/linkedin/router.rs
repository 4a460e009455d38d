//! Connect flow router and page handlers

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, Uri, header},
    response::Html,
    routing::get,
};

use crate::model::config::{BACKEND_URL_VAR, CLIENT_ID_VAR, Config};

use super::exchange::ExchangeClient;
use super::flow::{self, CallbackOutcome, CallbackStep};
use super::templates;
use super::types::{CallbackQuery, DebugSnapshot};

/// Shared state for page handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Create the connect flow router
pub fn create_router(config: Config) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route(flow::CALLBACK_PATH, get(handle_callback))
        .with_state(AppState { config })
}

/// Origin of the current request, the server-side equivalent of
/// `window.location.origin`
fn request_origin(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}

/// Handle the connect page (GET /)
async fn handle_home(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let Some(client_id) = &state.config.linkedin_client_id else {
        tracing::warn!("Connect page requested but {} is not set", CLIENT_ID_VAR);
        return Html(templates::render_config_error_page(
            "Configuration Error",
            &format!(
                "LinkedIn Client ID is not configured. Please set the {} environment variable.",
                CLIENT_ID_VAR
            ),
        ));
    };

    let auth_url = flow::authorize_url(client_id, &request_origin(&headers));
    Html(templates::render_home_page(&auth_url))
}

/// Handle the OAuth callback page (GET /linkedin/callback)
async fn handle_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(query): Query<CallbackQuery>,
) -> Html<String> {
    let current_url = format!("{}{}", request_origin(&headers), uri);
    let mut debug = DebugSnapshot::capture(&query, state.config.backend_url.as_deref(), &current_url);

    let (code, backend_url) = match flow::classify(&query, &state.config) {
        CallbackStep::Done(CallbackOutcome::ProviderErrored { message }) => {
            tracing::warn!("LinkedIn returned an error: {}", message);
            return Html(templates::render_callback_error_page(&message, &debug.pretty()));
        }
        CallbackStep::Done(CallbackOutcome::MissingCode { message }) => {
            tracing::warn!("Callback reached without a code");
            return Html(templates::render_callback_error_page(&message, &debug.pretty()));
        }
        CallbackStep::Done(CallbackOutcome::ConfigErrored) => {
            tracing::warn!("Callback reached but {} is not set", BACKEND_URL_VAR);
            return Html(templates::render_backend_config_error_page(&format!(
                "Backend URL is not configured. Please set the {} environment variable.",
                BACKEND_URL_VAR
            )));
        }
        CallbackStep::Exchange { code, backend_url } => (code, backend_url),
    };

    tracing::info!("Sending code to backend: {}", backend_url);

    let client = match ExchangeClient::new(&backend_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return Html(templates::render_callback_error_page(
                &e.to_string(),
                &debug.pretty(),
            ));
        }
    };

    match client.exchange(&code).await {
        Ok(profile) => {
            tracing::info!("Code exchange succeeded for {}", profile.name);
            Html(templates::render_profile_page(&profile))
        }
        Err(failure) => {
            tracing::error!("Code exchange failed: {}", failure.message);
            debug.merge_failure(&failure);
            Html(templates::render_callback_error_page(
                &failure.message,
                &debug.pretty(),
            ))
        }
    }
}
