//! Integration test utilities for the recipe API
//!
//! This crate provides helpers for running end-to-end tests against
//! a live server backed by PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
