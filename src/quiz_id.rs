// src/quiz_id.rs

use unicode_normalization::UnicodeNormalization;

/// Separator used both inside slugs and between the four id tokens.
pub const ID_SEPARATOR: char = '_';

fn is_stripped_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercase, strip diacritics, collapse every run of non `[a-z0-9]` into a
/// single `_`, then drop one leading and one trailing `_`.
pub fn slug(s: &str) -> String {
    let lowered = s.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;

    for c in lowered.nfd().filter(|c| !is_stripped_mark(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(ID_SEPARATOR);
            in_run = true;
        }
    }

    let trimmed = out.strip_prefix(ID_SEPARATOR).unwrap_or(&out);
    let trimmed = trimmed.strip_suffix(ID_SEPARATOR).unwrap_or(trimmed);
    trimmed.to_string()
}

/// Canonical quiz id: `slug(title)_slug(department)_slug(level)_slug(school)`.
///
/// Empty tokens are kept, so missing fields show up as doubled underscores.
pub fn derive_id(title: &str, department: &str, level: &str, school: &str) -> String {
    [title, department, level, school]
        .iter()
        .map(|s| slug(s))
        .collect::<Vec<_>>()
        .join("_")
}

// ======================================================
// Unit Tests
// ======================================================
