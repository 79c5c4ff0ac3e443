//! Levenshtein edit distance over Unicode scalar values.

/// Compute the Levenshtein edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions (each with cost 1) needed to turn `a` into `b`. Characters
/// are compared as `char`s, so a multi-byte scalar value counts as one edit.
///
/// Runs in `O(len(a) * len(b))` time and keeps a single rolling row sized
/// to the shorter input.
///
/// # Arguments
///
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
///
/// The edit distance. Symmetric in its arguments, `0` for equal strings and
/// `len(s)` when the other side is empty.
///
/// # Examples
///
/// ```
/// use namerank::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// assert_eq!(levenshtein("caf\u{00e9}", "cafe"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut row = Vec::new();
    levenshtein_chars(&a_chars, &b_chars, &mut row)
}

/// Inner distance routine over pre-collected chars with a reusable row.
///
/// `row` is cleared and resized as needed; its previous contents are
/// ignored. The shorter slice always indexes the row, keeping working memory
/// at `min(len(a), len(b)) + 1` cells.
pub(crate) fn levenshtein_chars(a: &[char], b: &[char], row: &mut Vec<usize>) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    // Row 0 of the table: turning "" into short[..j] costs j insertions.
    row.clear();
    row.extend(0..=short.len());

    for (i, &lc) in long.iter().enumerate() {
        // `diag` holds cell (i, j - 1) of the previous row before overwrite.
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = diag + cost;

            diag = row[j + 1];
            row[j + 1] = deletion.min(insertion).min(substitution);
        }
    }

    row[short.len()]
}
