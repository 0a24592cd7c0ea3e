//! Text normalization shared by indexing and querying.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block, removed after canonical decomposition.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize text for comparison.
///
/// Lowercases, strips diacritics (NFD, then drops combining marks), turns
/// every character that is not an ASCII word character into a separator,
/// collapses separator runs into one space and trims.
///
/// The result contains only `[a-z0-9_]` and single spaces, so normalizing
/// twice gives the same string.
///
/// # Example
/// ```
/// use srb_search::normalize_text;
///
/// assert_eq!(normalize_text("  Frågor & Svar! "), "fragor svar");
/// assert_eq!(normalize_text("Karl XII:s Bibel"), "karl xii s bibel");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut separator = false;

    for c in text.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            if separator && !out.is_empty() {
                out.push(' ');
            }
            separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            separator = true;
        }
    }

    out
}
