use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::core::tag::InvalidTagError;
use crate::core::types::{CatalogEntry, DestinationKey};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No default destination declared; add a line '*    <name>' to the tag file")]
    MissingDefault,

    #[error("Tag '{0}' is declared more than once")]
    DuplicateTag(String),

    #[error("Tag '{short}' is a prefix of tag '{long}'; reads starting with '{long}' would be ambiguous")]
    PrefixTag { short: String, long: String },

    #[error(transparent)]
    InvalidTag(#[from] InvalidTagError),
}

/// The catalog of known tags and where their reads go.
///
/// Built once and never modified. Rows are kept twice: in declaration order
/// for the similarity scan, and sorted by tag bytes for the exact matcher's
/// binary search. The default destination lives outside both orderings.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    /// Rows in the order they were declared
    entries: Vec<CatalogEntry>,

    /// The same rows sorted by tag
    sorted: Vec<CatalogEntry>,

    /// Destination for reads that match no tag
    default: DestinationKey,
}

impl TagCatalog {
    /// Build a catalog from its rows and the default destination.
    ///
    /// Rows may share a destination key. Tags must be distinct and no tag may
    /// be a strict prefix of another.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingDefault` if `default` is `None`,
    /// `CatalogError::DuplicateTag` if a tag is declared twice, or
    /// `CatalogError::PrefixTag` if one tag is a strict prefix of another.
    pub fn build(
        entries: impl IntoIterator<Item = CatalogEntry>,
        default: Option<DestinationKey>,
    ) -> Result<Self, CatalogError> {
        let default = default.ok_or(CatalogError::MissingDefault)?;
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();

        let mut sorted = entries.clone();
        sorted.sort_by(|a, b| a.tag.cmp(&b.tag));

        // Any tag that prefixes another sorts directly before a tag it prefixes
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0].tag, &pair[1].tag);
            if a == b {
                return Err(CatalogError::DuplicateTag(a.to_string()));
            }
            if a.is_strict_prefix_of(b) {
                return Err(CatalogError::PrefixTag {
                    short: a.to_string(),
                    long: b.to_string(),
                });
            }
        }

        debug!(
            tags = entries.len(),
            default = %default,
            "Built tag catalog"
        );

        Ok(Self {
            entries,
            sorted,
            default,
        })
    }

    /// Rows sorted by tag bytes
    #[must_use]
    pub fn lookup_sorted(&self) -> &[CatalogEntry] {
        &self.sorted
    }

    /// Rows in declaration order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Destination for unmatched reads
    #[must_use]
    pub fn default(&self) -> &DestinationKey {
        &self.default
    }

    /// Distinct destination keys, first-declared first, default last unless a
    /// row already uses the same key
    #[must_use]
    pub fn destinations(&self) -> Vec<&DestinationKey> {
        let mut seen: HashSet<&DestinationKey> = HashSet::new();
        self.entries
            .iter()
            .map(|e| &e.destination)
            .chain(std::iter::once(&self.default))
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Number of tag rows, not counting the default
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if only the default destination is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tag::Tag;

    fn entry(tag: &str, dest: &str) -> CatalogEntry {
        CatalogEntry::new(Tag::parse(tag).unwrap(), DestinationKey::new(dest))
    }

    fn trash() -> Option<DestinationKey> {
        Some(DestinationKey::new("trash"))
    }

    #[test]
    fn test_build_requires_default() {
        let result = TagCatalog::build(vec![entry("ACGT", "a")], None);
        assert_eq!(result.unwrap_err(), CatalogError::MissingDefault);
    }

    #[test]
    fn test_build_rejects_duplicate_tags() {
        let result = TagCatalog::build(vec![entry("ACGT", "a"), entry("acgt", "b")], trash());
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateTag("ACGT".to_string())
        );
    }

    #[test]
    fn test_build_rejects_prefix_tags() {
        let result = TagCatalog::build(
            vec![entry("ACGTT", "a"), entry("GG", "b"), entry("ACG", "c")],
            trash(),
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::PrefixTag {
                short: "ACG".to_string(),
                long: "ACGTT".to_string()
            }
        );
    }

    #[test]
    fn test_build_accepts_variable_length_prefix_free_tags() {
        let catalog = TagCatalog::build(
            vec![entry("ACGT", "a"), entry("AGG", "b"), entry("TTACG", "c")],
            trash(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_orderings() {
        let catalog = TagCatalog::build(
            vec![
                entry("GGTAAT", "2"),
                entry("ATCGCA", "0"),
                entry("CCAGTG", "1"),
            ],
            trash(),
        )
        .unwrap();

        let declared: Vec<&str> = catalog.entries().iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(declared, vec!["GGTAAT", "ATCGCA", "CCAGTG"]);

        let sorted: Vec<&str> = catalog
            .lookup_sorted()
            .iter()
            .map(|e| e.tag.as_str())
            .collect();
        assert_eq!(sorted, vec!["ATCGCA", "CCAGTG", "GGTAAT"]);

        assert_eq!(catalog.default().as_str(), "trash");
    }

    #[test]
    fn test_shared_destinations_keep_one_row_per_tag() {
        let catalog = TagCatalog::build(
            vec![
                entry("AAAA", "pool"),
                entry("CCCC", "pool"),
                entry("GGGG", "solo"),
            ],
            trash(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        let dests: Vec<&str> = catalog
            .destinations()
            .into_iter()
            .map(DestinationKey::as_str)
            .collect();
        assert_eq!(dests, vec!["pool", "solo", "trash"]);
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = TagCatalog::build(Vec::new(), trash()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.destinations().len(), 1);
    }
}
