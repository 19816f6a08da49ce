//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod categories;
pub mod comments;
pub mod feeds;
pub mod health;
pub mod media;
pub mod posts;
pub mod reactions;
pub mod users;
