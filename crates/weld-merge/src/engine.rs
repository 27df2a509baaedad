//! Payload substitution over the source document.

use weld_common::warning::warn_once;
use weld_refs::{ReferenceKind, ReferenceSet};
use std::collections::HashMap;

/// Opening marker wrapped around an inlined stylesheet payload.
const STYLE_OPEN: &str = "<style>";
/// Closing marker for an inlined stylesheet payload.
const STYLE_CLOSE: &str = "</style>";
/// Opening marker wrapped around an inlined script payload.
const SCRIPT_OPEN: &str = "<script>";
/// Closing marker for an inlined script payload.
const SCRIPT_CLOSE: &str = "</script>";

/// The inline wrapper markers for a payload of the given kind.
#[must_use]
pub const fn wrappers(kind: ReferenceKind) -> (&'static str, &'static str) {
    match kind {
        ReferenceKind::Style => (STYLE_OPEN, STYLE_CLOSE),
        ReferenceKind::Script => (SCRIPT_OPEN, SCRIPT_CLOSE),
    }
}

/// Substitute reference tags in `source` with their inlined payloads.
///
/// References are processed in set order. For the reference at position `i`
/// with a payload entry, every occurrence of its exact tag text in the
/// working document is replaced by the kind's opening marker, the payload
/// text as supplied, and the closing marker. Matching is literal, so tag
/// text full of regex metacharacters substitutes fine. Positions without a
/// payload entry are left in place untouched.
///
/// Two set entries with identical tag text share one substitution: the
/// first processed entry claims every occurrence and the later one finds
/// nothing left to replace. That later entry is a no-op, reported once
/// through the warning channel.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn merge_document(
    source: &str,
    references: &ReferenceSet,
    payloads: &HashMap<usize, String>,
) -> String {
    let mut merged = source.to_owned();
    for (index, reference) in references.iter().enumerate() {
        let Some(payload) = payloads.get(&index) else {
            continue;
        };
        if merged.contains(reference.raw_tag.as_str()) {
            let (open, close) = wrappers(reference.kind);
            merged = merged.replace(
                reference.raw_tag.as_str(),
                &format!("{open}{payload}{close}"),
            );
        } else {
            warn_once(
                "Merge",
                &format!(
                    "no occurrence left for reference {index} ({}); payload dropped",
                    reference.raw_tag
                ),
            );
        }
    }
    merged
}
