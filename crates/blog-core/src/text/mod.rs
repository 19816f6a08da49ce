//! Pure text transforms used when writing posts and media

mod filename;
mod slug;

pub use filename::{sanitize_filename, storage_filename};
pub use slug::{generate_excerpt, generate_slug, reading_time, strip_html, DEFAULT_EXCERPT_LENGTH};
