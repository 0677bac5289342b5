//! Tag catalog storage.
//!
//! The catalog holds the known tags, the destination each routes to, and the
//! default destination for reads that match nothing. It is built once from the
//! tag file (see [`crate::parsing::tag_file`]) and is read-only afterwards.
//!
//! ## Invariants
//!
//! - Exactly one default destination.
//! - No two rows share a tag.
//! - No tag is a strict prefix of another. Tags may vary in length, but a
//!   read starting with `ACGT` must not be claimable by both `ACG` and `ACGT`.
//!   This also keeps the exact matcher's binary search sound when it compares
//!   each tag against the read prefix of that tag's own length.
//!
//! ## Example
//!
//! ```rust
//! use tag_demux::catalog::store::TagCatalog;
//! use tag_demux::core::tag::Tag;
//! use tag_demux::core::types::{CatalogEntry, DestinationKey};
//!
//! let rows = vec![
//!     CatalogEntry::new(Tag::parse("ATCGCA").unwrap(), DestinationKey::new("s0")),
//!     CatalogEntry::new(Tag::parse("CCAGTG").unwrap(), DestinationKey::new("s1")),
//! ];
//! let catalog = TagCatalog::build(rows, Some(DestinationKey::new("trash"))).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.default().as_str(), "trash");
//! ```

pub mod store;
