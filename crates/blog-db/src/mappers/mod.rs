//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Write` structs: Prepare entity data for database operations

mod category;
mod comment;
mod media;
mod post;
mod reaction;
mod user;

pub use post::{assemble_public_posts, PostWrite};
pub use reaction::reactions_from_models;
