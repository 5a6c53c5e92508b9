//! Observability subsystem.
//!
//! Structured logging via `tracing`; request-level visibility comes from
//! the `TraceLayer` middleware in the HTTP stack.

pub mod logging;
