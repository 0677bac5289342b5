use serde::{Deserialize, Serialize};

use crate::utils::validation::is_valid_tag;

/// Error returned when a string is not a usable tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tag '{0}': tags must be non-empty and contain only A, C, G, T or N")]
pub struct InvalidTagError(pub String);

/// A short nucleotide sequence expected at the start of a read.
///
/// Tags are stored upper-case. Read bases are compared exactly as they
/// appear in the input, so a lower-case (soft-masked) read prefix never
/// equals a tag and scores no shared bases with it. Ordering is plain
/// byte-wise lexicographic order, which is the order the exact matcher
/// searches in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(Vec<u8>);

impl Tag {
    /// Parse a tag, upper-casing it first
    ///
    /// # Errors
    ///
    /// Returns `InvalidTagError` if the tag is empty or contains a symbol
    /// outside `ACGTN`.
    pub fn parse(s: &str) -> Result<Self, InvalidTagError> {
        let bases = s.trim().to_ascii_uppercase().into_bytes();
        if is_valid_tag(&bases) {
            Ok(Self(bases))
        } else {
            Err(InvalidTagError(s.to_string()))
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Validated to ASCII on construction
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed tag
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if this tag is a strict prefix of `other`
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Tag) -> bool {
        self.len() < other.len() && other.0.starts_with(&self.0)
    }

    /// The leading bases of `sequence` this tag is compared against, case
    /// unchanged. Shorter reads yield the whole read.
    #[must_use]
    pub fn window<'s>(&self, sequence: &'s [u8]) -> &'s [u8] {
        &sequence[..self.len().min(sequence.len())]
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = InvalidTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = InvalidTagError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}
