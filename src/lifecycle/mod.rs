//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT (signals.rs)
//!     → Shutdown broadcast (shutdown.rs)
//!     → Server stops accepting, drains, exits
//! ```
//!
//! # Design Decisions
//! - Configuration failures abort before the listener binds: no partial
//!   startup
//! - Shutdown is a broadcast so tests can trigger it without signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::spawn_signal_listener;
