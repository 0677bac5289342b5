//! Similarity-based matching.
//!
//! Every catalog tag is scored against the read prefix of the tag's length
//! with [`similarity`]. The best score wins only if it reaches the rate and no
//! other tag ties it; ambiguity routes to the default. A read whose prefix is
//! identical to a tag is accepted immediately.
//!
//! Two paired-end policies are provided:
//!
//! - [`select_paired`]: the mate with the higher best score decides; on equal
//!   scores the mates must point at the same row.
//! - [`select_paired_all`]: both mates must independently and unambiguously
//!   pick the same row at or above the rate.

use crate::catalog::store::TagCatalog;
use crate::core::types::CatalogEntry;
use crate::matching::scoring::similarity;

/// The best score of one read over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestHit {
    /// Highest similarity seen
    pub score: f64,
    /// Declaration index of the first row reaching `score`
    pub index: usize,
    /// No other row reaches `score`
    pub unique: bool,
}

impl BestHit {
    /// Reduce per-row scores to the best one. `None` for an empty catalog.
    #[must_use]
    #[allow(clippy::float_cmp)] // scores are exact ratios of small integers
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let mut iter = scores.iter().copied().enumerate();
        let (first_index, first_score) = iter.next()?;
        let mut best = Self {
            score: first_score,
            index: first_index,
            unique: true,
        };
        for (i, s) in iter {
            if s > best.score {
                best = Self {
                    score: s,
                    index: i,
                    unique: true,
                };
            } else if s == best.score {
                best.unique = false;
            }
        }
        Some(best)
    }

    /// Unambiguous and at or above the rate
    #[must_use]
    pub fn accepted(&self, rate: f64) -> bool {
        self.unique && self.score >= rate
    }
}

fn score(entry: &CatalogEntry, sequence: &[u8]) -> f64 {
    similarity(entry.tag.as_bytes(), entry.tag.window(sequence))
}

/// Score `sequence` against every row, in declaration order
#[must_use]
pub fn scan(catalog: &TagCatalog, sequence: &[u8]) -> Option<BestHit> {
    let scores: Vec<f64> = catalog
        .entries()
        .iter()
        .map(|e| score(e, sequence))
        .collect();
    BestHit::from_scores(&scores)
}

/// Match one read.
///
/// The first row whose tag equals the read prefix is returned without looking
/// further. Otherwise the best-scoring row is returned if it is unique and
/// scores at least `rate`.
#[must_use]
pub fn select_single<'a>(
    catalog: &'a TagCatalog,
    rate: f64,
    sequence: &[u8],
) -> Option<&'a CatalogEntry> {
    let entries = catalog.entries();
    let mut scores = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.tag.as_bytes() == entry.tag.window(sequence) {
            return Some(entry);
        }
        scores.push(score(entry, sequence));
    }

    let best = BestHit::from_scores(&scores)?;
    best.accepted(rate).then(|| &entries[best.index])
}

/// Match a read pair where either mate may carry the tag.
///
/// The mate with the strictly higher best score decides alone. When both
/// best scores are equal they must reach `rate`, at least one side must be
/// unambiguous, and both sides' first best rows must be the same row.
#[must_use]
pub fn select_paired<'a>(
    catalog: &'a TagCatalog,
    rate: f64,
    sequence_1: &[u8],
    sequence_2: &[u8],
) -> Option<&'a CatalogEntry> {
    let entries = catalog.entries();
    let hit_1 = scan(catalog, sequence_1)?;
    let hit_2 = scan(catalog, sequence_2)?;

    let chosen = if hit_1.score > hit_2.score {
        hit_1.accepted(rate).then_some(hit_1.index)
    } else if hit_2.score > hit_1.score {
        hit_2.accepted(rate).then_some(hit_2.index)
    } else if hit_1.score < rate || hit_1.index != hit_2.index {
        None
    } else {
        (hit_1.unique || hit_2.unique).then_some(hit_1.index)
    };

    chosen.map(|i| &entries[i])
}

/// Match a read pair where both mates must agree.
///
/// Each mate must reach `rate` with a unique best row, and the two rows must
/// be the same. Anything a pair is accepted for here, [`select_paired`]
/// accepts with the same row.
#[must_use]
pub fn select_paired_all<'a>(
    catalog: &'a TagCatalog,
    rate: f64,
    sequence_1: &[u8],
    sequence_2: &[u8],
) -> Option<&'a CatalogEntry> {
    let hit_1 = scan(catalog, sequence_1)?;
    let hit_2 = scan(catalog, sequence_2)?;

    (hit_1.accepted(rate) && hit_2.accepted(rate) && hit_1.index == hit_2.index)
        .then(|| &catalog.entries()[hit_1.index])
}
