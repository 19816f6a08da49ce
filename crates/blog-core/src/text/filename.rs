//! Upload filename handling

use crate::MediaId;

/// Replace every character outside `[a-zA-Z0-9.-]` with `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Name a stored upload: `{unix_millis}-{media id}-{sanitized original}`
///
/// The id keeps two uploads of the same name within one millisecond apart.
pub fn storage_filename(id: MediaId, timestamp_millis: i64, original: &str) -> String {
    format!("{timestamp_millis}-{id}-{}", sanitize_filename(original))
}
