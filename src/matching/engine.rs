use thiserror::Error;

use crate::catalog::store::TagCatalog;
use crate::core::types::CatalogEntry;
use crate::matching::{exact, similarity};
use crate::utils::validation::is_valid_rate;

#[derive(Error, Debug, PartialEq)]
pub enum MatchingError {
    #[error("Invalid similarity rate {0}: must be a number between 0 and 1")]
    InvalidRate(f64),
}

/// Result of matching a read (or pair) against the catalog.
///
/// `None` means the read goes to the catalog's default destination.
pub type MatchResult<'a> = Option<&'a CatalogEntry>;

/// How a read's leading bases are compared with the catalog tags
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchPolicy {
    /// The read must start with the tag exactly
    Exact,

    /// Best unique tag with similarity at least `rate`; for pairs, the
    /// stronger mate decides
    Similarity { rate: f64 },

    /// As `Similarity` for single reads; for pairs, both mates must pick the
    /// same tag at or above `rate`
    SimilarityAll { rate: f64 },
}

impl MatchPolicy {
    /// Choose a policy from command-line style options
    #[must_use]
    pub fn from_options(rate: Option<f64>, all: bool) -> Self {
        match (rate, all) {
            (None, _) => Self::Exact,
            (Some(rate), false) => Self::Similarity { rate },
            (Some(rate), true) => Self::SimilarityAll { rate },
        }
    }

    fn rate(&self) -> Option<f64> {
        match self {
            Self::Exact => None,
            Self::Similarity { rate } | Self::SimilarityAll { rate } => Some(*rate),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Similarity { rate } => write!(f, "similarity (rate {rate})"),
            Self::SimilarityAll { rate } => write!(f, "similarity, both mates (rate {rate})"),
        }
    }
}

/// Matches reads against a catalog with one fixed policy
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a TagCatalog,
    policy: MatchPolicy,
}

impl<'a> Matcher<'a> {
    /// Create a matcher, validating the policy's rate.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidRate` if the rate is not a finite number
    /// in `[0, 1]`.
    pub fn new(catalog: &'a TagCatalog, policy: MatchPolicy) -> Result<Self, MatchingError> {
        if let Some(rate) = policy.rate() {
            if !is_valid_rate(rate) {
                return Err(MatchingError::InvalidRate(rate));
            }
        }
        Ok(Self { catalog, policy })
    }

    #[must_use]
    pub fn catalog(&self) -> &'a TagCatalog {
        self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Find the tag a single read starts with
    #[must_use]
    pub fn select_single(&self, sequence: &[u8]) -> MatchResult<'a> {
        match self.policy {
            MatchPolicy::Exact => exact::select_single(self.catalog, sequence),
            MatchPolicy::Similarity { rate } | MatchPolicy::SimilarityAll { rate } => {
                similarity::select_single(self.catalog, rate, sequence)
            }
        }
    }

    /// Find the tag a read pair carries
    #[must_use]
    pub fn select_paired(&self, sequence_1: &[u8], sequence_2: &[u8]) -> MatchResult<'a> {
        match self.policy {
            MatchPolicy::Exact => exact::select_paired(self.catalog, sequence_1, sequence_2),
            MatchPolicy::Similarity { rate } => {
                similarity::select_paired(self.catalog, rate, sequence_1, sequence_2)
            }
            MatchPolicy::SimilarityAll { rate } => {
                similarity::select_paired_all(self.catalog, rate, sequence_1, sequence_2)
            }
        }
    }
}
