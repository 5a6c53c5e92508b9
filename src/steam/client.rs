//! Steam Web API client with timeout and error handling.
//!
//! # Responsibilities
//! - Build the player-summaries request URL (key + identifier, URL-encoded)
//! - Issue the outbound call with a bounded timeout
//! - Parse the response document into typed player summaries
//!
//! # Design Decisions
//! - One outbound call per lookup, no retries
//! - The upstream status line is not inspected; an unparseable body is the
//!   failure signal either way
//! - Response bodies are capped to keep a misbehaving upstream from
//!   buffering unbounded data

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;
use url::Url;

use crate::config::UpstreamConfig;
use crate::steam::types::{PlayerSummariesResponse, PlayerSummary};

/// Upper bound on the upstream response body size.
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Error type for upstream lookups. Everything here surfaces to the caller
/// as a server error; the variants exist for logging, not for the wire.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build upstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to read upstream response body: {0}")]
    Body(#[from] axum::Error),

    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the Steam player-summaries endpoint.
#[derive(Clone)]
pub struct SteamClient {
    client: Client<HttpConnector, Body>,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl SteamClient {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Look up the player summaries for one identifier.
    ///
    /// Returns however many players the upstream matched; cardinality is
    /// the caller's concern.
    pub async fn player_summaries(&self, steam_id: &str) -> Result<Vec<PlayerSummary>, SteamError> {
        let url = self.lookup_url(steam_id)?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(header::USER_AGENT, "avatar-proxy")
            .body(Body::empty())?;

        let response = match time::timeout(self.timeout, self.client.request(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(SteamError::Timeout(self.timeout)),
        };

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES).await?;
        let parsed: PlayerSummariesResponse = serde_json::from_slice(&bytes)?;

        Ok(parsed.response.players)
    }

    /// Build the lookup URL. The identifier is untrusted caller input and
    /// gets percent-encoded along with the key.
    fn lookup_url(&self, steam_id: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.endpoint,
            &[("key", self.api_key.as_str()), ("steamids", steam_id)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(endpoint: &str) -> SteamClient {
        SteamClient::new(&UpstreamConfig {
            endpoint: endpoint.to_string(),
            api_key: "k3y".to_string(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn lookup_url_carries_key_and_id() {
        let client = client_for("http://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/");
        let url = client.lookup_url("76561197968196788").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/?key=k3y&steamids=76561197968196788"
        );
    }

    #[test]
    fn lookup_url_encodes_hostile_identifiers() {
        let client = client_for("http://127.0.0.1:9999/summaries");
        let url = client.lookup_url("a&b=c d").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("steamids=a%26b%3Dc+d") || query.contains("steamids=a%26b%3Dc%20d"));
    }

    #[test]
    fn invalid_endpoint_is_a_url_error() {
        let client = client_for("not a url");
        assert!(matches!(
            client.lookup_url("1"),
            Err(url::ParseError::RelativeUrlWithoutBase)
        ));
    }
}
