//! Steam upstream integration.
//!
//! # Data Flow
//! ```text
//! identifier (caller-supplied, opaque)
//!     → client.rs (URL build, outbound GET, bounded timeout)
//!     → types.rs (deserialize player-summaries document)
//!     → Vec<PlayerSummary> or SteamError
//! ```
//!
//! # Design Decisions
//! - The identifier is forwarded verbatim; Steam enforces its own validation
//! - Only the full-size avatar field is ultimately consumed downstream
//! - All failures collapse to one caller-visible server error

pub mod client;
pub mod types;

pub use client::{SteamClient, SteamError};
pub use types::{PlayerList, PlayerSummariesResponse, PlayerSummary};
