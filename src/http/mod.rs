//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID stamping)
//!     → avatar handler (steam lookup, cardinality branch)
//!     → response.rs (JSON envelope, status mapping)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::{AvatarResponse, ErrorBody, LookupError};
pub use server::HttpServer;
