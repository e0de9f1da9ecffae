//! Slug derivation for post titles.

use slug::slugify;

use crate::error::{BlogError, Result};

/// How many numbered suffixes to try before giving up.
pub const MAX_SUFFIX_ATTEMPTS: usize = 100;

/// Derives the base slug for `title`.
pub fn derive_slug(title: &str) -> Result<String> {
    let candidate = slugify(title);
    if candidate.is_empty() {
        return Err(BlogError::InvalidRequest(format!(
            "cannot derive a slug from title '{}'",
            title
        )));
    }
    Ok(candidate)
}

/// Numbered variant of `base` used on collision: `base-1`, `base-2`, …
pub fn suffixed(base: &str, attempt: usize) -> String {
    format!("{base}-{attempt}")
}
