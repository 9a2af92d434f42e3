//! Levenshtein edit distance for tolerating spelling variants in skill names

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Classic dynamic programme over characters with a single rolling row sized
/// to the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = if lc == sc { 0 } else { 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Whether `a` and `b` are within `max_distance` edits of each other.
///
/// Skips the full computation when the length difference alone rules it out.
pub fn within_distance(a: &str, b: &str, max_distance: usize) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > max_distance {
        return false;
    }
    edit_distance(a, b) <= max_distance
}
