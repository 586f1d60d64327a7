//! REANA client module
//!
//! Provides `ReanaClient` for making API requests to a REANA server.

use super::Credentials;
use crate::error::ReanaError;
use owo_colors::OwoColorize;
use reqwest::Client;
use url::Url;

/// Options applied when building the underlying HTTP client.
#[derive(Clone, Copy, Debug)]
pub struct ClientOptions {
    /// Skip TLS certificate chain and hostname verification.
    ///
    /// REANA deployments commonly run behind self-signed certificates, so the
    /// CLI turns this on for its client only.
    pub accept_invalid_certs: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
        }
    }
}

/// REANA client for making API requests.
///
/// Each client owns its own `reqwest::Client`, so the certificate policy in
/// [`ClientOptions`] never leaks into other HTTP clients in the process.
///
/// # Example
/// ```no_run
/// use reana_client::client::{ClientOptions, Credentials, ReanaClient};
///
/// # async fn example() -> Result<(), reana_client::ReanaError> {
/// let credentials = Credentials::new("https://localhost:30443", "my-token");
/// let client = ReanaClient::try_new(credentials, ClientOptions::default())?;
///
/// let body = client.get("/api/workflows?type=workflow").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ReanaClient {
    client: Client,
    credentials: Credentials,
}

impl ReanaClient {
    /// Create a new ReanaClient from credentials and client options.
    ///
    /// # Errors
    /// Returns `ReanaError::Transport` if the HTTP client cannot be built
    pub fn try_new(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ReanaError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(ReanaError::Transport)?;

        if options.accept_invalid_certs {
            log::debug!("TLS certificate verification disabled for this client");
        }

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Get the configured server URL.
    pub fn server_url(&self) -> &str {
        &self.credentials.server_url
    }

    /// Build the full request URL for an API path.
    ///
    /// The path is appended to the server URL as-is and the access token is
    /// appended as the last query parameter without escaping.
    pub fn endpoint(&self, path: &str) -> Result<Url, ReanaError> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}access_token={}",
            self.credentials.server_url, path, separator, self.credentials.access_token
        );
        Ok(Url::parse(&url)?)
    }

    /// Send a GET request and return the full response body.
    ///
    /// # Errors
    /// - `ReanaError::InvalidUrl` if the request URL does not parse
    /// - `ReanaError::Transport` if the request cannot be sent
    /// - `ReanaError::BodyRead` if the body cannot be read to the end
    /// - `ReanaError::Status` if the server answers with a non-success status
    pub async fn get(&self, path: &str) -> Result<Vec<u8>, ReanaError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", redact_token(&url).bright_black());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ReanaError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ReanaError::BodyRead)?;
        log::debug!("Received {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(ReanaError::Status {
                status,
                message: error_message(&body),
            });
        }

        Ok(body.to_vec())
    }
}

impl std::fmt::Display for ReanaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.credentials.server_url)
    }
}

/// Render a URL for logging with the access token masked.
fn redact_token(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "access_token" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Extract the `message` field REANA puts in error bodies, falling back to
/// the raw body text.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}
