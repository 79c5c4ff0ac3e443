//! Composite similarity scoring for a single (input, candidate) pair.
//!
//! Three signals feed the score:
//!
//! | Signal        | Range  | Description                                          |
//! |---------------|--------|------------------------------------------------------|
//! | `token`       | 0..=1  | Share of input tokens found among candidate tokens   |
//! | `partial`     | 0..=1  | `len(input) / len(candidate)` when literally contained |
//! | `levenshtein` | 0..=1  | `1 - distance / max_len`                             |
//!
//! When either lexical signal (`token` or `partial`) is positive the
//! composite is `max(token, partial) * 0.6 + levenshtein * 0.4`. Otherwise
//! only edit distance is available and the composite is capped at
//! `levenshtein * 0.2`, so short strings with a few shared characters never
//! outrank candidates that share a word or substring with the input.

use std::borrow::Cow;
use std::collections::HashSet;

use memchr::memmem::Finder;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::distance::levenshtein_chars;
use crate::options::RankOptions;
use crate::tokenize::tokenize;

/// Weight of the best lexical signal when one is present.
const LEXICAL_WEIGHT: f64 = 0.6;

/// Weight of the edit-distance signal alongside lexical evidence.
const EDIT_WEIGHT: f64 = 0.4;

/// Weight of the edit-distance signal when there is no lexical evidence.
const EDIT_ONLY_WEIGHT: f64 = 0.2;

/// Breakdown of how well a candidate matches an input.
///
/// All fields are in `[0.0, 1.0]`. `composite` is the value used for
/// ranking; the other three are the signals it was built from.
///
/// # Examples
///
/// ```
/// use namerank::score;
///
/// let s = score("note", "notepad");
/// assert_eq!(s.token, 0.0);
/// assert!((s.partial - 4.0 / 7.0).abs() < 1e-12);
/// assert!(s.has_lexical_evidence());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    /// Fraction of input tokens that also occur among the candidate's tokens.
    pub token: f64,
    /// `len(input) / len(candidate)` if the candidate contains the input as a
    /// case-sensitive substring, otherwise `0.0`.
    pub partial: f64,
    /// Normalized edit similarity, `1 - distance / max(len(input), len(candidate))`.
    pub levenshtein: f64,
    /// Weighted combination of the three signals above.
    pub composite: f64,
}

impl Score {
    /// Combine raw signals into a score, computing the composite.
    fn from_signals(token: f64, partial: f64, levenshtein: f64) -> Self {
        let composite = if token > 0.0 || partial > 0.0 {
            token.max(partial) * LEXICAL_WEIGHT + levenshtein * EDIT_WEIGHT
        } else {
            levenshtein * EDIT_ONLY_WEIGHT
        };
        Self {
            token,
            partial,
            levenshtein,
            composite,
        }
    }

    /// Returns `true` when the token or substring signal is positive.
    ///
    /// Scores without lexical evidence are capped at `0.2`.
    pub fn has_lexical_evidence(&self) -> bool {
        self.token > 0.0 || self.partial > 0.0
    }
}

/// Strip diacritics by NFD-decomposing and dropping combining marks.
///
/// Returns [`Cow::Borrowed`] when nothing changes (always the case for
/// ASCII), so callers only pay for an allocation when a mark is removed.
///
/// # Arguments
///
/// * `s` - The string to fold
///
/// # Returns
///
/// The input with all combining marks removed after decomposition.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use namerank::scoring::fold_diacritics;
///
/// assert_eq!(fold_diacritics("caf\u{00e9}"), "cafe");
/// assert!(matches!(fold_diacritics("cafe"), Cow::Borrowed(_)));
/// ```
pub fn fold_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let folded: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if folded == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(folded)
    }
}

/// Apply the configured preparation to one side of a comparison.
fn prepare<'a>(s: &'a str, options: &RankOptions) -> Cow<'a, str> {
    if options.fold_diacritics {
        fold_diacritics(s)
    } else {
        Cow::Borrowed(s)
    }
}

/// Per-worker buffers reused across candidates.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    /// Chars of the candidate currently being scored.
    chars: Vec<char>,
    /// Rolling row of the edit-distance table.
    row: Vec<usize>,
}

/// Input-side data computed once and shared across every candidate.
///
/// Holds the prepared input text, its chars, its tokens and a substring
/// searcher, so ranking N candidates does the input-side work only once.
pub(crate) struct PreparedInput<'a> {
    text: Cow<'a, str>,
    chars: Vec<char>,
    tokens: Vec<String>,
    /// `None` for an empty input, which never yields a positive partial score.
    finder: Option<Finder<'static>>,
    options: RankOptions,
}

impl<'a> PreparedInput<'a> {
    /// Prepare `input` for repeated scoring under `options`.
    pub(crate) fn new(input: &'a str, options: &RankOptions) -> Self {
        let text = prepare(input, options);
        let chars: Vec<char> = text.chars().collect();
        let tokens = tokenize(&text);
        let finder = if text.is_empty() {
            None
        } else {
            Some(Finder::new(text.as_bytes()).into_owned())
        };
        Self {
            text,
            chars,
            tokens,
            finder,
            options: *options,
        }
    }

    /// Score one candidate against the prepared input.
    pub(crate) fn score(&self, candidate: &str, scratch: &mut Scratch) -> Score {
        let candidate = prepare(candidate, &self.options);

        scratch.chars.clear();
        scratch.chars.extend(candidate.chars());
        let candidate_len = scratch.chars.len();

        let token = self.token_score(&candidate);
        let partial = self.partial_score(&candidate, candidate_len);

        let distance = levenshtein_chars(&self.chars, &scratch.chars, &mut scratch.row);
        let max_len = self.chars.len().max(candidate_len);
        let levenshtein = if max_len == 0 {
            1.0
        } else {
            1.0 - distance as f64 / max_len as f64
        };

        Score::from_signals(token, partial, levenshtein)
    }

    /// Fraction of input tokens present in the candidate's token set.
    ///
    /// Each input token occurrence counts at most once, however often it
    /// appears in the candidate. Duplicated input tokens stay in the
    /// denominator.
    fn token_score(&self, candidate: &str) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        let candidate_tokens = tokenize(candidate);
        if candidate_tokens.is_empty() {
            return 0.0;
        }

        let candidate_set: HashSet<&str> = candidate_tokens.iter().map(String::as_str).collect();
        let shared = self
            .tokens
            .iter()
            .filter(|t| candidate_set.contains(t.as_str()))
            .count();

        shared as f64 / self.tokens.len() as f64
    }

    /// Length ratio when the candidate literally contains the input.
    ///
    /// The containment test runs on the prepared strings without
    /// lowercasing, so "chrome" is not found in "Google Chrome" even though
    /// the token signal matches it.
    fn partial_score(&self, candidate: &str, candidate_len: usize) -> f64 {
        let Some(finder) = &self.finder else {
            return 0.0;
        };
        if candidate_len == 0 || finder.find(candidate.as_bytes()).is_none() {
            return 0.0;
        }
        self.chars.len() as f64 / candidate_len as f64
    }

    /// The input after preparation.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

/// Score how well `candidate` matches `input`, returning every signal.
///
/// The measure is directional: the token signal is normalized by the input's
/// token count and the partial signal asks whether the candidate contains
/// the input, not the reverse.
///
/// # Arguments
///
/// * `input` - The user-typed string
/// * `candidate` - The string being evaluated
///
/// # Returns
///
/// A [`Score`] whose `composite` field is the similarity in `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use namerank::score;
///
/// let s = score("chrome", "Google Chrome");
/// assert_eq!(s.token, 1.0);
/// // Substring containment is case-sensitive.
/// assert_eq!(s.partial, 0.0);
/// assert!(s.composite > 0.6);
/// ```
pub fn score(input: &str, candidate: &str) -> Score {
    score_with_options(input, candidate, &RankOptions::default())
}

/// Score a pair under explicit [`RankOptions`].
///
/// # Arguments
///
/// * `input` - The user-typed string
/// * `candidate` - The string being evaluated
/// * `options` - Preparation options applied to both strings
///
/// # Returns
///
/// The [`Score`] breakdown for the prepared pair.
///
/// # Examples
///
/// ```
/// use namerank::{RankOptions, score_with_options};
///
/// let opts = RankOptions { fold_diacritics: true };
/// assert_eq!(score_with_options("cafe", "Caf\u{00e9}", &opts).composite,
///            score_with_options("cafe", "Cafe", &opts).composite);
/// ```
pub fn score_with_options(input: &str, candidate: &str, options: &RankOptions) -> Score {
    let prepared = PreparedInput::new(input, options);
    let mut scratch = Scratch::default();
    prepared.score(candidate, &mut scratch)
}

/// Composite similarity of `candidate` to `input`, in `[0.0, 1.0]`.
///
/// Shorthand for `score(input, candidate).composite`.
///
/// # Examples
///
/// ```
/// use namerank::similarity;
///
/// assert_eq!(similarity("notepad", "notepad"), 1.0);
/// assert!(similarity("chrome", "Google Chrome") > similarity("xyz123", "Google Chrome"));
/// ```
pub fn similarity(input: &str, candidate: &str) -> f64 {
    score(input, candidate).composite
}
