#![warn(missing_docs)]

//! Fuzzy ranking of candidate names against a typed query.
//!
//! `namerank` resolves an ambiguous, user-typed name (a partial application
//! or process name, say) against a list of candidate strings. Each candidate
//! gets a composite similarity score built from token overlap, literal
//! substring containment and Levenshtein distance; the ranker returns the
//! best matches in descending order.
//!
//! ```
//! use namerank::rank;
//!
//! let apps = ["Google Chrome", "Firefox", "Chromium"];
//! assert_eq!(rank("chrome", &apps, 1).unwrap(), ["Google Chrome"]);
//! ```

/// Word tokenization used by the token-overlap signal.
pub mod tokenize;

/// Levenshtein edit distance over Unicode scalar values.
pub mod distance;

/// Composite similarity scoring for a single input/candidate pair.
pub mod scoring;

/// Ranking a candidate set against an input.
pub mod rank;

/// Ordering of scored candidates.
pub mod sort;

/// String access for ranking candidates.
pub mod candidate;

/// Configuration options for scoring and ranking.
pub mod options;

/// Error types for ranking operations.
pub mod error;

// Re-export primary public API types and functions at the crate root.
pub use candidate::AsCandidate;
pub use distance::levenshtein;
pub use error::{RankError, Result};
pub use options::RankOptions;
pub use rank::{
    ScoredCandidate, best_match, rank, rank_scored, rank_scored_with_options, rank_with_options,
};
pub use scoring::{Score, score, score_with_options, similarity};
pub use sort::compare_scored;
pub use tokenize::tokenize;
