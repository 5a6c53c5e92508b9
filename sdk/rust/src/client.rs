use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Success body returned by `GET /avatar/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

/// Error body returned by the proxy on 4xx/5xx.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AvatarClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("proxy returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Minimal client for the avatar proxy endpoint.
pub struct AvatarClient {
    client: Client,
    base_url: String,
}

impl AvatarClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an identifier to the player's full-size avatar URL.
    pub async fn avatar_url(&self, id: &str) -> Result<String, AvatarClientError> {
        let resp = self
            .client
            .get(format!("{}/avatar/{}", self.base_url, id))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            let body: AvatarResponse = resp.json().await?;
            return Ok(body.avatar_url);
        }

        // Error bodies use the {"error": ...} envelope; fall back to the
        // raw text when the body isn't ours (e.g. middleware timeouts).
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error)
            .unwrap_or(text);

        Err(AvatarClientError::Api { status, message })
    }
}
