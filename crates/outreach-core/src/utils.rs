//! Shared helpers for uploads and search filtering

use uuid::Uuid;

/// Map an image content type to its stored file extension
///
/// Returns `None` for anything that is not an accepted image type, which
/// callers treat as an unsupported-format rejection.
#[must_use]
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Generate a collision-free stored filename for an uploaded image
///
/// The original client filename is untrusted and only ever logged; the
/// stored name is a fresh UUID plus the extension derived from the
/// declared content type.
#[must_use]
pub fn stored_image_name(content_type: &str) -> Option<String> {
    image_extension(content_type).map(|ext| format!("{}.{ext}", Uuid::new_v4()))
}

/// Normalize a search term for use in an ILIKE pattern
///
/// Trims surrounding whitespace and escapes the SQL LIKE wildcards so
/// user input matches literally. Returns `None` for blank input, which
/// callers treat as "no search filter".
#[must_use]
pub fn normalize_search(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }

    let escaped = trimmed
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Some(format!("%{escaped}%"))
}
