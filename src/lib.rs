//! Avatar Proxy
//!
//! A single-endpoint HTTP proxy built with Tokio and Axum: it resolves a
//! caller-supplied Steam identifier to the player's full-size avatar URL.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                 AVATAR PROXY                  │
//!                       │                                               │
//!  GET /avatar/{id}     │  ┌─────────┐    ┌──────────────────────────┐ │
//!  ─────────────────────┼─▶│  http   │───▶│      avatar handler      │ │
//!                       │  │ server  │    │  (cardinality branch)    │ │
//!                       │  └─────────┘    └────────────┬─────────────┘ │
//!                       │                              │               │
//!                       │                              ▼               │
//!  200 {"avatar_url"}   │  ┌─────────┐    ┌──────────────────────────┐ │    Steam
//!  ◀────────────────────┼──│response │◀───│       steam client       │◀┼──── Web
//!  400 / 500 {"error"}  │  │envelope │    │  (GET, bounded timeout)  │ │     API
//!                       │  └─────────┘    └──────────────────────────┘ │
//!                       │                                               │
//!                       │  ┌─────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns          │ │
//!                       │  │  config · observability · lifecycle      │ │
//!                       │  └─────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! The proxy is stateless: nothing is cached or retained across requests,
//! and the one potentially blocking operation (the upstream call) runs
//! under a bounded timeout.

// Core subsystems
pub mod config;
pub mod http;
pub mod steam;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, AppConfig, ConfigError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
