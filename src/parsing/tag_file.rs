use std::path::Path;

use thiserror::Error;

use crate::catalog::store::{CatalogError, TagCatalog};
use crate::core::tag::Tag;
use crate::core::types::{CatalogEntry, DestinationKey, DEFAULT_MARKER};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tag file format: {0}")]
    InvalidFormat(String),

    #[error("Default destination declared twice (lines {first} and {second})")]
    DuplicateDefault { first: usize, second: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a tag file into a catalog
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`parse_tag_text`].
pub fn parse_tag_file(path: &Path) -> Result<TagCatalog, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tag_text(&content)
}

/// Parse tag file text with one `TAG  SUFFIX` mapping per line.
///
/// ```text
/// # comment
/// ATCGCA    sample_a
/// CCAGTG    sample_b
/// *         trash
/// ```
///
/// Blank lines and `#` comments are skipped. The `*` line names the default
/// destination and is required. Several tags may share a suffix, in which
/// case their reads go to the same output.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line does not have exactly two
/// fields, `ParseError::DuplicateDefault` if `*` appears twice, or
/// `ParseError::Catalog` if a tag is invalid, repeated, a prefix of another
/// tag, or no default is declared.
pub fn parse_tag_text(text: &str) -> Result<TagCatalog, ParseError> {
    let mut entries = Vec::new();
    let mut default: Option<(usize, DestinationKey)> = None;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // 1-based
        let line_num = i + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [tag, suffix] = fields[..] else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected 2 (tag and output name)",
                fields.len()
            )));
        };

        let destination = DestinationKey::new(suffix);
        if tag == DEFAULT_MARKER {
            if let Some((first, _)) = &default {
                return Err(ParseError::DuplicateDefault {
                    first: *first,
                    second: line_num,
                });
            }
            default = Some((line_num, destination));
        } else {
            let tag = Tag::parse(tag).map_err(CatalogError::from)?;
            entries.push(CatalogEntry::new(tag, destination));
        }
    }

    Ok(TagCatalog::build(entries, default.map(|(_, d)| d))?)
}
