//! Ranking a candidate set against an input.
//!
//! The ranker prepares the input once (chars, tokens and a substring
//! searcher), scores every candidate against it, and orders the results
//! with [`compare_scored`]. Large candidate sets are scored on the rayon thread
//! pool when the `parallel` feature is enabled; the output is the same
//! either way because ordering depends only on (score, index).

use log::{debug, trace, warn};

use crate::candidate::AsCandidate;
use crate::error::{RankError, Result};
use crate::options::RankOptions;
use crate::scoring::{PreparedInput, Scratch};
use crate::sort::compare_scored;

/// Candidate count at which scoring moves to the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// A candidate paired with its composite score.
///
/// Borrowed from the caller's candidate slice; lives only as long as the
/// ranking result it is part of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The candidate string as supplied by the caller.
    pub candidate: &'a str,
    /// Position of the candidate in the caller's slice.
    pub index: usize,
    /// Composite similarity to the input, in `[0.0, 1.0]`.
    pub score: f64,
}

fn score_one<'a>(
    prepared: &PreparedInput<'_>,
    index: usize,
    candidate: &'a str,
    scratch: &mut Scratch,
) -> ScoredCandidate<'a> {
    let score = prepared.score(candidate, scratch).composite;
    trace!("scored {candidate:?} at {score:.4}");
    ScoredCandidate {
        candidate,
        index,
        score,
    }
}

fn score_sequential<'a, T: AsCandidate>(
    prepared: &PreparedInput<'_>,
    candidates: &'a [T],
) -> Vec<ScoredCandidate<'a>> {
    let mut scratch = Scratch::default();
    candidates
        .iter()
        .enumerate()
        .map(|(index, item)| score_one(prepared, index, item.as_candidate(), &mut scratch))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_parallel<'a, T: AsCandidate + Sync>(
    prepared: &PreparedInput<'_>,
    candidates: &'a [T],
) -> Vec<ScoredCandidate<'a>> {
    use rayon::prelude::*;

    // One scratch buffer per rayon job; `collect` keeps index order.
    candidates
        .par_iter()
        .enumerate()
        .map_init(Scratch::default, |scratch, (index, item)| {
            score_one(prepared, index, item.as_candidate(), scratch)
        })
        .collect()
}

fn score_all<'a, T: AsCandidate + Sync>(
    prepared: &PreparedInput<'_>,
    candidates: &'a [T],
) -> Vec<ScoredCandidate<'a>> {
    #[cfg(feature = "parallel")]
    {
        if candidates.len() >= PARALLEL_THRESHOLD {
            return score_parallel(prepared, candidates);
        }
    }

    score_sequential(prepared, candidates)
}

/// Rank candidates under explicit options, keeping each score.
///
/// This is the engine behind every other ranking entry point.
///
/// # Arguments
///
/// * `input` - The user-typed string
/// * `candidates` - The candidate pool, in caller order
/// * `top_k` - Maximum number of results; must be at least 1
/// * `options` - Preparation options applied to the input and every candidate
///
/// # Returns
///
/// Up to `top_k` [`ScoredCandidate`]s, best first. Equal scores keep the
/// order in which the candidates were supplied.
///
/// # Errors
///
/// [`RankError::InvalidTopK`] when `top_k` is zero.
///
/// # Examples
///
/// ```
/// use namerank::{RankOptions, rank_scored_with_options};
///
/// let apps = ["Caf\u{00e9} Manager", "Calculator"];
/// let opts = RankOptions { fold_diacritics: true };
/// let ranked = rank_scored_with_options("cafe", &apps, 1, &opts).unwrap();
/// assert_eq!(ranked[0].candidate, "Caf\u{00e9} Manager");
/// assert_eq!(ranked[0].index, 0);
/// ```
pub fn rank_scored_with_options<'a, T: AsCandidate + Sync>(
    input: &str,
    candidates: &'a [T],
    top_k: usize,
    options: &RankOptions,
) -> Result<Vec<ScoredCandidate<'a>>> {
    if top_k == 0 {
        warn!("rejecting ranking request with top_k = 0");
        return Err(RankError::InvalidTopK { top_k });
    }
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let prepared = PreparedInput::new(input, options);
    debug!(
        "ranking {} candidates against {:?} (top_k = {top_k})",
        candidates.len(),
        prepared.text()
    );

    let mut scored = score_all(&prepared, candidates);

    // `compare_scored` is total within one call (indices are unique), so
    // partial selection followed by a sort is deterministic.
    if top_k < scored.len() {
        scored.select_nth_unstable_by(top_k - 1, compare_scored);
        scored.truncate(top_k);
    }
    scored.sort_unstable_by(compare_scored);

    Ok(scored)
}

/// Rank candidates with default options, keeping each score.
///
/// # Examples
///
/// ```
/// use namerank::rank_scored;
///
/// let ranked = rank_scored("note", &["notepad", "firefox", "notion"], 3).unwrap();
/// let names: Vec<&str> = ranked.iter().map(|s| s.candidate).collect();
/// assert_eq!(names, ["notepad", "notion", "firefox"]);
/// assert!(ranked[0].score > ranked[1].score);
/// ```
pub fn rank_scored<'a, T: AsCandidate + Sync>(
    input: &str,
    candidates: &'a [T],
    top_k: usize,
) -> Result<Vec<ScoredCandidate<'a>>> {
    rank_scored_with_options(input, candidates, top_k, &RankOptions::default())
}

/// Rank candidates under explicit options, returning only the names.
///
/// # Errors
///
/// [`RankError::InvalidTopK`] when `top_k` is zero.
pub fn rank_with_options<T: AsCandidate + Sync>(
    input: &str,
    candidates: &[T],
    top_k: usize,
    options: &RankOptions,
) -> Result<Vec<String>> {
    let scored = rank_scored_with_options(input, candidates, top_k, options)?;
    Ok(scored
        .into_iter()
        .map(|s| s.candidate.to_owned())
        .collect())
}

/// Return the `top_k` candidates that best match `input`, best first.
///
/// Every candidate is scored with [`similarity`](crate::similarity); the
/// results are ordered by descending score with ties kept in caller order,
/// then truncated to `min(top_k, candidates.len())`.
///
/// # Arguments
///
/// * `input` - The user-typed string
/// * `candidates` - The candidate pool, in caller order
/// * `top_k` - Maximum number of results; must be at least 1
///
/// # Returns
///
/// The best-matching candidate strings. An empty pool gives an empty vector.
///
/// # Errors
///
/// [`RankError::InvalidTopK`] when `top_k` is zero.
///
/// # Examples
///
/// ```
/// use namerank::{RankError, rank};
///
/// let ranked = rank("note", &["notepad", "firefox", "notion"], 2).unwrap();
/// assert_eq!(ranked, ["notepad", "notion"]);
///
/// let empty: [&str; 0] = [];
/// assert!(rank("note", &empty, 3).unwrap().is_empty());
///
/// assert_eq!(
///     rank("note", &["notepad"], 0),
///     Err(RankError::InvalidTopK { top_k: 0 })
/// );
/// ```
pub fn rank<T: AsCandidate + Sync>(input: &str, candidates: &[T], top_k: usize) -> Result<Vec<String>> {
    rank_with_options(input, candidates, top_k, &RankOptions::default())
}

/// Pick the single best candidate, if any.
///
/// Equivalent to taking the first element of [`rank`] with `top_k = 1`.
///
/// # Examples
///
/// ```
/// use namerank::best_match;
///
/// let running = ["explorer", "chrome", "Code"];
/// assert_eq!(best_match("chrom", &running).as_deref(), Some("chrome"));
///
/// let none: [&str; 0] = [];
/// assert_eq!(best_match("chrom", &none), None);
/// ```
pub fn best_match<T: AsCandidate + Sync>(input: &str, candidates: &[T]) -> Option<String> {
    rank_scored_with_options(input, candidates, 1, &RankOptions::default())
        .ok()?
        .into_iter()
        .next()
        .map(|s| s.candidate.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scored: &[ScoredCandidate<'_>]) -> Vec<String> {
        scored.iter().map(|s| s.candidate.to_owned()).collect()
    }

    #[test]
    fn ranks_by_descending_score() {
        let ranked = rank("note", &["notepad", "firefox", "notion"], 3).unwrap();
        assert_eq!(ranked, ["notepad", "notion", "firefox"]);
    }

    #[test]
    fn truncates_to_top_k() {
        let ranked = rank("note", &["notepad", "firefox", "notion"], 2).unwrap();
        assert_eq!(ranked, ["notepad", "notion"]);
    }

    #[test]
    fn top_k_larger_than_pool() {
        let ranked = rank("note", &["notepad", "notion"], 10).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn zero_top_k_is_rejected() {
        assert_eq!(
            rank("note", &["notepad"], 0),
            Err(RankError::InvalidTopK { top_k: 0 })
        );
    }

    #[test]
    fn zero_top_k_is_rejected_even_for_empty_pool() {
        let empty: Vec<String> = Vec::new();
        assert!(rank("note", &empty, 0).is_err());
    }

    #[test]
    fn empty_pool_gives_empty_result() {
        let empty: Vec<String> = Vec::new();
        assert!(rank("note", &empty, 5).unwrap().is_empty());
    }

    #[test]
    fn ties_keep_caller_order() {
        // Identical candidates always tie.
        let ranked = rank_scored("zzz", &["abc", "abc", "abc"], 3).unwrap();
        let indices: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn ties_keep_caller_order_after_selection() {
        let pool = ["bbb", "aaa", "ccc", "ddd"];
        // No overlap with any candidate; all score equally.
        let ranked = rank_scored("xyz", &pool, 2).unwrap();
        assert_eq!(names(&ranked), ["bbb", "aaa"]);
    }

    #[test]
    fn scored_results_carry_index_and_score() {
        let ranked = rank_scored("note", &["firefox", "notepad"], 1).unwrap();
        assert_eq!(ranked[0].candidate, "notepad");
        assert_eq!(ranked[0].index, 1);
        assert!((ranked[0].score - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn accepts_owned_strings() {
        let pool = vec!["Notepad".to_owned(), "notepad".to_owned()];
        assert_eq!(rank("notepad", &pool, 1).unwrap(), ["notepad"]);
    }

    #[test]
    fn best_match_picks_first() {
        assert_eq!(
            best_match("note", &["firefox", "notion", "notepad"]).as_deref(),
            Some("notepad")
        );
    }

    #[test]
    fn best_match_empty_pool() {
        let empty: [&str; 0] = [];
        assert_eq!(best_match("note", &empty), None);
    }

    #[test]
    fn fold_option_reaches_scoring() {
        let pool = ["cafe bar", "caf\u{00e9}"];
        let folded = rank_with_options(
            "caf\u{00e9}",
            &pool,
            1,
            &RankOptions {
                fold_diacritics: true,
            },
        )
        .unwrap();
        assert_eq!(folded, ["caf\u{00e9}"]);
    }

    #[test]
    fn sequential_scoring_keeps_index_order() {
        let prepared = PreparedInput::new("note", &RankOptions::default());
        let scored = score_sequential(&prepared, &["notepad", "firefox", "notion"]);
        let indices: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_scoring_matches_sequential() {
        let pool: Vec<String> = (0..2_000)
            .map(|i| match i % 4 {
                0 => format!("notepad {i}"),
                1 => format!("firefox-{i}"),
                2 => "notion".to_owned(),
                _ => format!("Note Taker {}", i % 7),
            })
            .collect();
        let prepared = PreparedInput::new("note", &RankOptions::default());

        let parallel = score_parallel(&prepared, &pool);
        let sequential = score_sequential(&prepared, &pool);
        assert_eq!(parallel, sequential);

        // Large pools go through the parallel path end-to-end.
        let first = rank_scored("note", &pool, 25).unwrap();
        let second = rank_scored("note", &pool, 25).unwrap();
        assert_eq!(first, second);
    }
}
