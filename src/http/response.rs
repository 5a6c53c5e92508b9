//! Response bodies and error-to-status mapping.
//!
//! # Responsibilities
//! - Define the success and error JSON envelopes
//! - Map lookup outcomes to HTTP status codes
//!
//! # Design Decisions
//! - Zero or multiple matches are client errors (400), not faults: they are
//!   legitimate outcomes of the identifier-to-player mapping
//! - Upstream transport/parse failures are server errors (500) carrying the
//!   underlying error text
//! - Error message strings are part of the wire contract

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::steam::SteamError;

/// Success payload: the matched player's full-size avatar URL, verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

/// Error payload shared by client and server errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Everything an avatar lookup can fail with.
///
/// The `Display` strings double as the wire-visible error messages, so the
/// two client-error variants are verbatim contract text.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("player doesn't exist")]
    NoMatch,

    #[error("more than 1 player is found")]
    Ambiguous,

    #[error(transparent)]
    Upstream(#[from] SteamError),
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::NoMatch | LookupError::Ambiguous => StatusCode::BAD_REQUEST,
            LookupError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
