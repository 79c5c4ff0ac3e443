//! Configuration options for scoring and ranking.
//!
//! [`RankOptions`] carries settings that apply to every (input, candidate)
//! pair evaluated during a ranking call.

/// Options that control how strings are prepared before scoring.
///
/// # Defaults
///
/// All fields default to the plain scoring behavior:
/// - `fold_diacritics`: `false` (strings are compared exactly as given)
///
/// # Examples
///
/// ```
/// use namerank::RankOptions;
///
/// let opts = RankOptions::default();
/// assert!(!opts.fold_diacritics);
///
/// let opts = RankOptions { fold_diacritics: true, ..Default::default() };
/// assert!(opts.fold_diacritics);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// When `true`, both the input and each candidate are NFD-decomposed and
    /// stripped of combining marks before any signal is computed, so
    /// "cafe" and "caf\u{00e9}" compare as identical. When `false`
    /// (default), strings are scored exactly as supplied.
    pub fold_diacritics: bool,
}
