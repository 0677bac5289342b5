//! Exact prefix matching.
//!
//! A read matches a tag when its leading bases equal the tag. The catalog's
//! sorted rows are binary searched, each step comparing that row's tag with
//! the read prefix of that tag's length. Because the catalog is prefix-free,
//! every tag sorting before the matching tag compares less than its own read
//! prefix and every tag sorting after compares greater, so the search finds
//! the match whenever one exists.

use crate::catalog::store::TagCatalog;
use crate::core::types::CatalogEntry;

/// Find the row whose tag equals the start of `sequence`
#[must_use]
pub fn select_single<'a>(catalog: &'a TagCatalog, sequence: &[u8]) -> Option<&'a CatalogEntry> {
    let sorted = catalog.lookup_sorted();
    sorted
        .binary_search_by(|e| e.tag.as_bytes().cmp(e.tag.window(sequence)))
        .ok()
        .map(|i| &sorted[i])
}

/// Match both mates independently and reconcile.
///
/// One mate matching is enough; two mates matching different rows is a
/// conflict and routes to the default.
#[must_use]
pub fn select_paired<'a>(
    catalog: &'a TagCatalog,
    sequence_1: &[u8],
    sequence_2: &[u8],
) -> Option<&'a CatalogEntry> {
    match (
        select_single(catalog, sequence_1),
        select_single(catalog, sequence_2),
    ) {
        (Some(a), Some(b)) if a == b => Some(a),
        (Some(_), Some(_)) => None,
        (Some(a), None) | (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}
