//! Ordering of scored candidates.
//!
//! Provides the two-level comparator used by the ranker: composite score
//! (descending), then original candidate index (ascending).

use std::cmp::Ordering;

use crate::rank::ScoredCandidate;

/// Two-level comparator for sorting scored candidates.
///
/// 1. **Higher score wins** -- a better composite score comes first.
/// 2. **Lower index wins** -- when scores are equal, the candidate supplied
///    earlier by the caller comes first.
///
/// Because the index is unique within one ranking call, the comparator is a
/// total order over the candidates of that call. The resulting order never
/// depends on sort stability or on the order in which scores were computed.
///
/// # Arguments
///
/// * `a` - First scored candidate
/// * `b` - Second scored candidate
///
/// # Returns
///
/// [`Ordering`] suitable for [`slice::sort_by`] or similar sorting methods.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use namerank::{ScoredCandidate, compare_scored};
///
/// let a = ScoredCandidate { candidate: "notepad", index: 0, score: 0.57 };
/// let b = ScoredCandidate { candidate: "notion", index: 2, score: 0.1 };
///
/// assert_eq!(compare_scored(&a, &b), Ordering::Less);
/// ```
pub fn compare_scored(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    // Level 1: higher score first. `partial_cmp` is `None` only for NaN,
    // which scoring never produces; fall through to the index in that case.
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        // Level 2: earlier candidate first.
        .then_with(|| a.index.cmp(&b.index))
}
