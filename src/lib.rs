//! # tag-demux
//!
//! A library for demultiplexing sequencing reads by an inline tag.
//!
//! Multiplexed libraries often carry a short sample tag at the very start of
//! each read. `tag-demux` matches that leading tag against a catalog of known
//! tags, removes it, and routes the read (or read pair) to the output for
//! that sample. Reads that match nothing, or match ambiguously, go to a
//! default output instead of being guessed.
//!
//! ## Features
//!
//! - **Exact matching**: Binary search of the read prefix over the sorted catalog
//! - **Similarity matching**: Closest unique tag above a similarity rate
//! - **Paired-end reconciliation**: Either mate may carry the tag, or both must agree
//! - **Variable-length tags**: Any prefix-free tag set is supported
//! - **Shared outputs**: Several tags may route to the same output files
//!
//! ## Example
//!
//! ```rust
//! use tag_demux::parsing::tag_file::parse_tag_text;
//! use tag_demux::{MatchPolicy, Matcher};
//!
//! let catalog = parse_tag_text("ATCGCA  s0\nCCAGTG  s1\nGGTAAT  s2\n*  trash\n").unwrap();
//! let matcher = Matcher::new(&catalog, MatchPolicy::Similarity { rate: 0.75 }).unwrap();
//!
//! let hit = matcher.select_single(b"CCAGGGACGTACGT").unwrap();
//! assert_eq!(hit.destination.as_str(), "s1");
//!
//! let paired = matcher.select_paired(b"CCAGGGACGT", b"AAAAAAACGT").unwrap();
//! assert_eq!(paired.tag.as_str(), "CCAGTG");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Tag catalog storage and invariants
//! - [`core`]: Tags, destinations and the trimmable read trait
//! - [`matching`]: Matching engine, policies and similarity scoring
//! - [`parsing`]: Tag file loader
//! - [`demux`]: Demultiplexing loop, FASTQ sinks and read counts
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod demux;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, TagCatalog};
pub use core::read::TaggedRead;
pub use core::tag::Tag;
pub use core::types::*;
pub use demux::run::{Demultiplexer, Route};
pub use matching::engine::{MatchPolicy, MatchResult, Matcher, MatchingError};
