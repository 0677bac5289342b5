//! Centralized validation and helper functions.

/// Symbols accepted in a tag
pub const TAG_ALPHABET: &[u8] = b"ACGTN";

/// Validate that a byte string is a usable tag: non-empty, upper-case `ACGTN`.
///
/// # Examples
///
/// ```
/// use tag_demux::utils::validation::is_valid_tag;
///
/// assert!(is_valid_tag(b"ACGTN"));
/// assert!(!is_valid_tag(b""));
/// assert!(!is_valid_tag(b"acgt")); // callers upper-case first
/// assert!(!is_valid_tag(b"ACGU"));
/// ```
#[must_use]
pub fn is_valid_tag(bases: &[u8]) -> bool {
    !bases.is_empty() && bases.iter().all(|b| TAG_ALPHABET.contains(b))
}

/// Check that a similarity threshold is a finite number in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use tag_demux::utils::validation::is_valid_rate;
///
/// assert!(is_valid_rate(0.0));
/// assert!(is_valid_rate(0.75));
/// assert!(is_valid_rate(1.0));
/// assert!(!is_valid_rate(1.01));
/// assert!(!is_valid_rate(f64::NAN));
/// ```
#[must_use]
pub fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && (0.0..=1.0).contains(&rate)
}

/// Build the output file name for a destination suffix.
///
/// `mate` is `None` for single-end output and `Some(1)` / `Some(2)` for the
/// two files of a paired-end destination.
#[must_use]
pub fn output_file_name(prefix: &str, suffix: &str, mate: Option<u8>) -> String {
    match mate {
        Some(m) => format!("{prefix}-{suffix}_{m}.fastq"),
        None => format!("{prefix}-{suffix}.fastq"),
    }
}
