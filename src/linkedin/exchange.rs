//! Backend code exchange client
//!
//! Sends the authorization code to the backend, which performs the actual
//! token exchange with LinkedIn and returns profile data.

use serde_json::{Value, json};

use crate::http_client::build_client;

use super::types::{ExchangeFailure, UserProfile};

/// Backend exchange endpoint path
pub const EXCHANGE_PATH: &str = "/api/linkedin/exchange";

const FALLBACK_MESSAGE: &str = "Failed to exchange LinkedIn code";

/// Client for the backend exchange endpoint
pub struct ExchangeClient {
    client: reqwest::Client,
    backend_url: String,
}

impl ExchangeClient {
    pub fn new(backend_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client()?,
            backend_url: backend_url.into(),
        })
    }

    /// POST the authorization code to the backend and parse the profile
    ///
    /// Issues exactly one request; failures are never retried here.
    pub async fn exchange(&self, code: &str) -> Result<UserProfile, ExchangeFailure> {
        let url = format!("{}{}", self.backend_url, EXCHANGE_PATH);

        let response = match self
            .client
            .post(&url)
            .json(&json!({ "code": code }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(transport_failure(&e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_failure(status.as_u16(), &body));
        }

        match response.json::<UserProfile>().await {
            Ok(profile) => Ok(profile),
            Err(e) => Err(ExchangeFailure {
                message: format!("Invalid profile response: {}", e),
                response_error: Some(e.to_string()),
                response_status: Some(status.as_u16()),
                response_data: None,
            }),
        }
    }
}

/// Failure before any response was received
fn transport_failure(error: &reqwest::Error) -> ExchangeFailure {
    let message = error.to_string();
    ExchangeFailure {
        message: if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message.clone()
        },
        response_error: Some(message),
        response_status: None,
        response_data: None,
    }
}

/// Failure reported by the backend with a non-2xx status
///
/// The display message prefers the response body: a JSON string is used
/// verbatim, any other JSON value is serialized to a display string, plain
/// text is used as-is.
fn upstream_failure(status: u16, body: &str) -> ExchangeFailure {
    let data = serde_json::from_str::<Value>(body)
        .ok()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| Value::String(body.to_string()));

    let message = match &data {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::String(_) => FALLBACK_MESSAGE.to_string(),
        other => other.to_string(),
    };

    ExchangeFailure {
        message,
        response_error: Some(format!("Request failed with status code {}", status)),
        response_status: Some(status),
        response_data: Some(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_exchange_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/linkedin/exchange")
            .match_body(Matcher::Json(json!({"code": "AQABC"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"name":"Jane Doe","email":"jane@x.com","profilePictureUrl":"https://img/x.png"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let profile = client.exchange("AQABC").await.unwrap();

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email.as_deref(), Some("jane@x.com"));
        assert_eq!(profile.profile_picture_url.as_deref(), Some("https://img/x.png"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_exchange_error_with_json_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/linkedin/exchange")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"token exchange failed"}"#)
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert!(failure.message.contains("token exchange failed"));
        assert_eq!(failure.response_status, Some(500));
        assert_eq!(
            failure.response_data,
            Some(json!({"message": "token exchange failed"}))
        );
    }

    #[tokio::test]
    async fn test_exchange_error_with_plain_text_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/linkedin/exchange")
            .with_status(400)
            .with_body("invalid authorization code")
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert_eq!(failure.message, "invalid authorization code");
        assert_eq!(failure.response_status, Some(400));
    }

    #[tokio::test]
    async fn test_exchange_error_with_json_string_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/linkedin/exchange")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#""code already used""#)
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert_eq!(failure.message, "code already used");
    }

    #[tokio::test]
    async fn test_exchange_error_with_empty_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/linkedin/exchange")
            .with_status(502)
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert_eq!(failure.message, FALLBACK_MESSAGE);
        assert_eq!(failure.response_status, Some(502));
    }

    #[tokio::test]
    async fn test_exchange_malformed_success_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/linkedin/exchange")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"email":"jane@x.com"}"#)
            .create_async()
            .await;

        let client = ExchangeClient::new(server.url()).unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert!(failure.message.contains("Invalid profile response"));
        assert_eq!(failure.response_status, Some(200));
    }

    #[tokio::test]
    async fn test_exchange_connection_refused() {
        // Port 1 is never listening
        let client = ExchangeClient::new("http://127.0.0.1:1").unwrap();
        let failure = client.exchange("AQABC").await.unwrap_err();

        assert!(!failure.message.is_empty());
        assert_eq!(failure.response_status, None);
        assert_eq!(failure.response_data, None);
    }
}
