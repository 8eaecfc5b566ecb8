///
/// Number of positions at which two equal-length sequences differ.
///
/// Returns `None` if the lengths differ.
///
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.bytes()
            .zip(b.bytes())
            .filter(|(x, y)| x != y)
            .count(),
    )
}

///
/// Levenshtein distance: the minimum number of single-symbol substitutions, insertions and
/// deletions turning `a` into `b`.
///
/// Uses two rows of the dynamic-programming table, so memory is linear in `b`.
///
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &x) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &y) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(x != y);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
