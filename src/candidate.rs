//! String access for ranking candidates.
//!
//! The ranker accepts any slice of items implementing [`AsCandidate`], so
//! callers can pass `Vec<String>`, `&[&str]` or their own record types
//! (a process entry, an installed application) without first copying the
//! names out.

use std::borrow::Cow;

/// Trait for types that can be ranked as candidates.
///
/// Implementors expose the name that is scored against the input via
/// [`as_candidate`](AsCandidate::as_candidate).
///
/// # Built-in Implementations
///
/// - [`String`] -- delegates to [`String::as_str`]
/// - [`str`] -- returns `self`
/// - [`&str`] -- dereferences and returns `self`
/// - [`Cow<'_, str>`] -- delegates to [`AsRef::as_ref`]
///
/// # Examples
///
/// ```
/// use namerank::{AsCandidate, rank};
///
/// struct Process {
///     name: String,
///     count: usize,
/// }
///
/// impl AsCandidate for Process {
///     fn as_candidate(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let procs = vec![
///     Process { name: "firefox".to_owned(), count: 4 },
///     Process { name: "notepad".to_owned(), count: 1 },
/// ];
/// assert_eq!(procs[1].count, 1);
/// assert_eq!(rank("notepad", &procs, 1).unwrap(), ["notepad"]);
/// ```
pub trait AsCandidate {
    /// Returns the string that is scored for this candidate.
    fn as_candidate(&self) -> &str;
}

impl AsCandidate for String {
    fn as_candidate(&self) -> &str {
        self.as_str()
    }
}

impl AsCandidate for str {
    fn as_candidate(&self) -> &str {
        self
    }
}

// Needed so `T = &str` satisfies the bound for `&[&str]` slices.
impl AsCandidate for &str {
    fn as_candidate(&self) -> &str {
        self
    }
}

impl AsCandidate for Cow<'_, str> {
    fn as_candidate(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_candidate() {
        let s = String::from("notepad");
        assert_eq!(s.as_candidate(), "notepad");
    }

    #[test]
    fn str_ref_candidate() {
        let s: &str = "firefox";
        assert_eq!(s.as_candidate(), "firefox");
    }

    #[test]
    fn unsized_str_candidate() {
        let s: &str = "notion";
        assert_eq!(<str as AsCandidate>::as_candidate(s), "notion");
    }

    #[test]
    fn cow_candidates() {
        let borrowed: Cow<'_, str> = Cow::Borrowed("explorer");
        let owned: Cow<'_, str> = Cow::Owned("explorer".to_owned());
        assert_eq!(borrowed.as_candidate(), "explorer");
        assert_eq!(owned.as_candidate(), "explorer");
    }
}
