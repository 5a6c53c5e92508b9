//! Wire types for the Steam player-summaries endpoint.

use serde::Deserialize;

/// Top-level document returned by `GetPlayerSummaries`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummariesResponse {
    pub response: PlayerList,
}

/// The `response` envelope: zero or more matched players.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerList {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// One matched player. Only `avatar_full` is consumed by the proxy; the
/// rest of the document is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "avatarfull", default)]
    pub avatar_full: String,
    #[serde(rename = "avatarmedium", default)]
    pub avatar_medium: String,
    #[serde(rename = "profileurl", default)]
    pub profile_url: String,
    #[serde(rename = "personaname", default)]
    pub persona_name: String,
    #[serde(rename = "realname", default)]
    pub real_name: String,
    #[serde(rename = "steamid", default)]
    pub steam_id: String,
}
