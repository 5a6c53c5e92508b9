//! Rust client for the avatar proxy.

pub mod client;

pub use client::{AvatarClient, AvatarClientError, AvatarResponse, ErrorResponse};
