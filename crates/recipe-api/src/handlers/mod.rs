//! HTTP request handlers
//!
//! Thin adapters between axum extractors and the service layer.

pub mod auth;
pub mod health;
pub mod recipes;
