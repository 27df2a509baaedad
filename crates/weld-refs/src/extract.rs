//! Reference extraction via pattern matching.
//!
//! The extractor runs two independent scans over the raw source text, one
//! per tag flavor, and concatenates their results. It never builds a DOM.

use lazy_static::lazy_static;
use regex::Regex;
use crate::reference::{Reference, ReferenceKind};

lazy_static! {
    // A complete `<link ...>` start tag. Tag names match case-insensitively.
    static ref STYLE_TAG: Regex = Regex::new(r"(?i)<link[^>]*>").unwrap();
    // A `<script ...>` opening tag, optionally swallowing an immediately
    // following `<`-free body together with its closing tag. A body that
    // contains `<` leaves the match at the opening tag alone.
    static ref SCRIPT_TAG: Regex =
        Regex::new(r"(?i)<script[^>]*>(?:[^<]*</script>)?").unwrap();
}

/// Scan `source` for reference tags.
///
/// Results come in two fixed batches: every `<link ...>` tag in source
/// order, then every `<script ...>` tag in source order. A script that
/// precedes a link in the document therefore still sorts after it here, and
/// every consumer of reference positions sees that same batch order.
///
/// Each returned [`Reference`] holds the matched tag text verbatim. Returns
/// an empty vector when the source contains no reference tags.
#[must_use]
pub fn extract(source: &str) -> Vec<Reference> {
    let styles = STYLE_TAG
        .find_iter(source)
        .map(|tag| Reference::new(tag.as_str().to_owned(), ReferenceKind::Style));
    let scripts = SCRIPT_TAG
        .find_iter(source)
        .map(|tag| Reference::new(tag.as_str().to_owned(), ReferenceKind::Script));
    styles.chain(scripts).collect()
}
