//! Slug generation for post file names
//!
//! A slug keeps ASCII lowercase letters, ASCII digits and precomposed
//! Hangul syllables; every maximal run of anything else collapses into a
//! single [`SEPARATOR`], and separators never lead or trail.

use std::ops::RangeInclusive;

/// Character that replaces runs of disallowed characters
pub const SEPARATOR: char = '-';

/// Precomposed Hangul syllables block (가 to 힣)
const HANGUL_SYLLABLES: RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || HANGUL_SYLLABLES.contains(&c)
}

/// Converts arbitrary text into a path-safe token
///
/// Total and deterministic. Returns an empty string when `text` has no
/// character in the kept set; callers must treat that as an invalid
/// publish target.
///
/// ```
/// use blogpub_core::domain::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("  A/B Test!! "), "a-b-test");
/// assert_eq!(slugify("Rust 회고록 2024"), "rust-회고록-2024");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_slug_char(c) {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
