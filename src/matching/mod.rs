//! Tag matching engine and similarity scoring.
//!
//! This module provides the core matching functionality:
//!
//! - [`Matcher`]: Matches reads against a catalog with one [`MatchPolicy`]
//! - [`exact`]: Exact prefix matching by binary search
//! - [`similarity`]: Best-unique-tag matching above a similarity rate
//! - [`scoring`]: The similarity function and catalog diagnostics
//!
//! ## Policies
//!
//! | Policy          | Single read                | Read pair                          |
//! |-----------------|----------------------------|------------------------------------|
//! | `Exact`         | read starts with the tag   | either mate matches, no conflict   |
//! | `Similarity`    | best unique tag >= rate    | the stronger mate decides          |
//! | `SimilarityAll` | best unique tag >= rate    | both mates pick the same tag       |
//!
//! Tags are only ever compared with the read prefix of the tag's own length.
//! Matching never fails: ambiguous or weak matches return `None` and the read
//! goes to the default destination.
//!
//! ## Example
//!
//! ```rust
//! use tag_demux::catalog::store::TagCatalog;
//! use tag_demux::core::tag::Tag;
//! use tag_demux::core::types::{CatalogEntry, DestinationKey};
//! use tag_demux::matching::engine::{MatchPolicy, Matcher};
//!
//! let rows = ["ATCGCA", "CCAGTG", "GGTAAT"].iter().map(|t| {
//!     CatalogEntry::new(Tag::parse(t).unwrap(), DestinationKey::new(*t))
//! });
//! let catalog = TagCatalog::build(rows, Some(DestinationKey::new("trash"))).unwrap();
//!
//! let matcher = Matcher::new(&catalog, MatchPolicy::Similarity { rate: 0.75 }).unwrap();
//! let hit = matcher.select_single(b"CCAGGGTTACAGATTACA").unwrap();
//! assert_eq!(hit.tag.as_str(), "CCAGTG");
//! assert!(matcher.select_single(b"AAAAAA").is_none());
//! ```
//!
//! [`Matcher`]: engine::Matcher
//! [`MatchPolicy`]: engine::MatchPolicy

pub mod engine;
pub mod exact;
pub mod scoring;
pub mod similarity;
