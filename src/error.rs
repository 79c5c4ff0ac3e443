//! Error types for ranking operations.

use thiserror::Error;

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;

/// Errors returned by the ranking entry points.
///
/// Scoring itself is total over all string inputs; the only failure surface
/// is argument validation on the ranker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The requested number of results was zero.
    #[error("invalid top_k {top_k}: at least one result must be requested")]
    InvalidTopK {
        /// The rejected value.
        top_k: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_top_k_display() {
        let err = RankError::InvalidTopK { top_k: 0 };
        assert_eq!(
            err.to_string(),
            "invalid top_k 0: at least one result must be requested"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            RankError::InvalidTopK { top_k: 0 },
            RankError::InvalidTopK { top_k: 0 }
        );
    }
}
