//! Integration test utilities for the blog server
//!
//! Helpers for running end-to-end tests against the REST API and feeds.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
