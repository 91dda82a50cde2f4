//! Levenshtein edit distance over Unicode scalars.
//!
//! Fuzzy-ranking signal only: the exact-match path never calls this.

/// Minimum number of single-character insertions, deletions and
/// substitutions transforming `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP; `prev[j]` is the distance between a[..i] and b[..j].
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost) // substitute
                .min(prev[j + 1] + 1) // delete from a
                .min(curr[j] + 1); // insert into a
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
