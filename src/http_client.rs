//! HTTP Client builder module

use reqwest::Client;

/// Build the HTTP client used for backend requests
///
/// No request timeout is set; the exchange call relies on the client's
/// default behavior.
pub fn build_client() -> anyhow::Result<Client> {
    Ok(Client::builder().use_rustls_tls().build()?)
}
