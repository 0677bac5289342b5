//! Parsers for demultiplexing configuration.
//!
//! This module provides the tag file loader, which turns a whitespace
//! separated `TAG  OUTPUT_NAME` list into a [`TagCatalog`].
//!
//! ## Example
//!
//! ```rust
//! use tag_demux::parsing::tag_file::parse_tag_text;
//!
//! let catalog = parse_tag_text("ATCGCA  s0\nCCAGTG  s1\n*  trash\n").unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.default().as_str(), "trash");
//! ```
//!
//! ## Format
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | 1 | Tag (`ACGTN`), or `*` for the default destination | Yes |
//! | 2 | Output name used to build the output file name | Yes |
//!
//! [`TagCatalog`]: crate::catalog::store::TagCatalog

pub mod tag_file;
