//! Word tokenization used by the token-overlap signal.
//!
//! A token is a lowercase run of word characters. Anything else (punctuation,
//! symbols, whitespace) separates tokens and is discarded.

/// Returns whether `c` counts as a word character.
///
/// Word characters are Unicode letters and digits plus the underscore, the
/// same set a `\w` regex class accepts for Latin and most other scripts.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a string into normalized word tokens.
///
/// The whole string is lowercased first, then split on every run of
/// non-word characters. Empty fragments are dropped, so leading, trailing
/// and repeated separators never produce empty tokens. Duplicates are kept
/// in source order.
///
/// # Arguments
///
/// * `s` - The string to tokenize
///
/// # Returns
///
/// The tokens in the order they appear. Empty input, or input made only of
/// punctuation and whitespace, produces an empty vector.
///
/// # Examples
///
/// ```
/// use namerank::tokenize;
///
/// assert_eq!(tokenize("Hello, World!  foo_bar"), ["hello", "world", "foo_bar"]);
/// assert_eq!(tokenize("Google-Chrome.exe"), ["google", "chrome", "exe"]);
/// assert!(tokenize("!!!").is_empty());
/// ```
pub fn tokenize(s: &str) -> Vec<String> {
    // Lowercase the full string rather than char-by-char so context-sensitive
    // mappings (final sigma) match `str::to_lowercase`.
    let lowered = s.to_lowercase();

    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}
