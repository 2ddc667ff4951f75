//! Generic text canonicalization.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize an optional cell value; null stays null.
pub fn canonicalize(value: Option<&str>) -> Option<String> {
    value.map(canonicalize_text)
}

/// Trim, decompose (NFKD) and drop non-ASCII characters, then keep only
/// alphanumerics, whitespace, `@`, `.`, `_` and `-`.
///
/// The result is trimmed again so that the function is idempotent when a
/// dropped character sat next to outer whitespace.
///
/// ```
/// use fieldclean_normalize::canonicalize_text;
///
/// assert_eq!(canonicalize_text("  João #1 "), "Joao 1");
/// assert_eq!(canonicalize_text("ﬁ@ção.com"), "fi@cao.com");
/// ```
pub fn canonicalize_text(value: &str) -> String {
    let filtered: String = value
        .trim()
        .nfkd()
        .filter(|ch| ch.is_ascii() && is_kept(*ch))
        .collect();
    filtered.trim().to_string()
}

fn is_kept(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch.is_ascii_whitespace() || matches!(ch, '@' | '.' | '_' | '-')
}
