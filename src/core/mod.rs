//! Core data types for tag demultiplexing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Tag`]: A validated nucleotide tag expected at the start of a read
//! - [`DestinationKey`]: Opaque identifier of an output destination
//! - [`CatalogEntry`]: A (tag, destination) row of the catalog
//! - [`TaggedRead`]: A read that can be matched and trimmed in place
//!
//! ## Tags
//!
//! Tags are drawn from the alphabet `A C G T N` and stored upper-case. Tags in
//! one catalog may differ in length, but no tag may be a strict prefix of
//! another (see [`crate::catalog`]).
//!
//! [`Tag`]: tag::Tag
//! [`DestinationKey`]: types::DestinationKey
//! [`CatalogEntry`]: types::CatalogEntry
//! [`TaggedRead`]: read::TaggedRead

pub mod read;
pub mod tag;
pub mod types;
