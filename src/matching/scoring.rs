use crate::catalog::store::TagCatalog;

/// Convert a base count to f64 for ratio calculations
///
/// Tags and read prefixes are short, so the conversion is exact.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Length of the longest common subsequence of `a` and `b`
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Rolling single row over b; `diag` holds the previous row's value at j - 1
    let mut row = vec![0usize; b.len() + 1];
    for &x in a {
        let mut diag = 0;
        for (j, &y) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if x == y {
                diag + 1
            } else {
                up.max(row[j])
            };
            diag = up;
        }
    }
    row[b.len()]
}

/// Indel distance: insertions and deletions cost 1, a substitution costs 2
#[must_use]
pub fn indel_distance(a: &[u8], b: &[u8]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

/// Normalized similarity of two sequences in `[0, 1]`.
///
/// `(|a| + |b| - indel_distance) / (|a| + |b|)`. Symmetric, exactly `1.0`
/// iff the sequences are identical, and decreasing with every edit. Two empty
/// sequences are identical.
///
/// # Examples
///
/// ```
/// use tag_demux::matching::scoring::similarity;
///
/// assert_eq!(similarity(b"CCAGTG", b"CCAGTG"), 1.0);
/// assert!((similarity(b"CCAGTG", b"CCAGGG") - 10.0 / 12.0).abs() < 1e-12);
/// assert_eq!(similarity(b"AAAA", b"CCCC"), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &[u8], b: &[u8]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    count_to_f64(total - indel_distance(a, b)) / count_to_f64(total)
}

/// Largest similarity between any two distinct tags of the catalog.
///
/// A rate at or below this value lets a read halfway between two tags be
/// claimed by either, so it is a useful lower bound when choosing `--rate`.
/// Returns `0.0` when the catalog holds fewer than two tags.
#[must_use]
pub fn max_pairwise_similarity(catalog: &TagCatalog) -> f64 {
    let entries = catalog.entries();
    let mut best = 0.0_f64;
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            best = best.max(similarity(a.tag.as_bytes(), b.tag.as_bytes()));
        }
    }
    best
}
