use serde::{Deserialize, Serialize};

use crate::core::tag::Tag;

/// Marker for the default destination in tag files, counts and logs
pub const DEFAULT_MARKER: &str = "*";

/// Opaque identifier for where a read is routed.
///
/// Several catalog entries may hold equal keys when they share an output
/// suffix; the sink resolves each distinct key to one output resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DestinationKey(pub String);

impl DestinationKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the tag catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub tag: Tag,
    pub destination: DestinationKey,
}

impl CatalogEntry {
    pub fn new(tag: Tag, destination: DestinationKey) -> Self {
        Self { tag, destination }
    }
}

/// Whether reads arrive one at a time or as mate pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadLayout {
    SingleEnd,
    PairedEnd,
}
