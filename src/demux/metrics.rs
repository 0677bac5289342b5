use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::store::TagCatalog;
use crate::core::types::DEFAULT_MARKER;
use crate::demux::run::Route;

/// Reads routed for one tag (or for the default)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag, or `*` for the default destination
    pub tag: String,
    /// Destination the tag routes to
    pub destination: String,
    /// Units (reads or pairs) routed
    pub reads: u64,
}

/// Per-tag counts of routed reads, in catalog declaration order with the
/// default last
#[derive(Debug, Clone)]
pub struct ReadCounter {
    rows: Vec<TagCount>,
    index: HashMap<String, usize>,
}

impl ReadCounter {
    /// A counter with every catalog tag and the default at zero
    #[must_use]
    pub fn new(catalog: &TagCatalog) -> Self {
        let mut counter = Self {
            rows: Vec::with_capacity(catalog.len() + 1),
            index: HashMap::with_capacity(catalog.len() + 1),
        };
        for entry in catalog.entries() {
            counter.insert(entry.tag.as_str(), entry.destination.as_str());
        }
        counter.insert(DEFAULT_MARKER, catalog.default().as_str());
        counter
    }

    fn insert(&mut self, tag: &str, destination: &str) -> usize {
        if let Some(&i) = self.index.get(tag) {
            return i;
        }
        let i = self.rows.len();
        self.rows.push(TagCount {
            tag: tag.to_string(),
            destination: destination.to_string(),
            reads: 0,
        });
        self.index.insert(tag.to_string(), i);
        i
    }

    /// Count one routed unit
    pub fn increment(&mut self, route: &Route<'_>) {
        let i = self.insert(route.counter_key(), route.destination.as_str());
        self.rows[i].reads += 1;
    }

    /// Count for a tag, or for `*`
    #[must_use]
    pub fn get(&self, tag: &str) -> u64 {
        self.index.get(tag).map_or(0, |&i| self.rows[i].reads)
    }

    #[must_use]
    pub fn rows(&self) -> &[TagCount] {
        &self.rows
    }

    /// Units counted across all tags
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.reads).sum()
    }
}
