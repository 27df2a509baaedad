//! The ordered reference collection.
//!
//! A [`ReferenceSet`] holds the references of one source document in
//! extraction order. Positions in the set are the contract with the merge
//! stage: payloads are keyed by position, and removal renumbers everything
//! after the removed entry.

use thiserror::Error;
use crate::extract::extract;
use crate::reference::Reference;
use crate::resolve::resolve_url;

/// Error raised by position lookups in a [`ReferenceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefSetError {
    /// A position at or past the current end of the set was requested.
    #[error("reference index {index} out of range (set holds {len})")]
    OutOfRange {
        /// The requested position.
        index: usize,
        /// Number of references the set held at lookup time.
        len: usize,
    },
}

/// The ordered, filterable collection of references for one merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    references: Vec<Reference>,
}

impl ReferenceSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            references: Vec::new(),
        }
    }

    /// Build a set directly from HTML source text.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let mut set = Self::new();
        set.initialize(source);
        set
    }

    /// Discard any prior contents and repopulate the set from `source`.
    /// Ordering follows the extractor: all links first, then all scripts.
    pub fn initialize(&mut self, source: &str) {
        self.references = extract(source);
    }

    /// Number of references currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the set holds no references.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Look up the reference at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RefSetError::OutOfRange`] when `index` is past the current
    /// end of the set. Positions shift on removal, so an index that was
    /// valid before a [`remove_matching`](Self::remove_matching) call may
    /// not be afterwards.
    pub fn get(&self, index: usize) -> Result<&Reference, RefSetError> {
        self.references.get(index).ok_or(RefSetError::OutOfRange {
            index,
            len: self.references.len(),
        })
    }

    /// Append a reference at the end of the set.
    pub fn append(&mut self, reference: Reference) {
        self.references.push(reference);
    }

    /// Remove every reference whose tag text carries an
    /// `attribute="value"` assignment where the value contains `pattern`.
    ///
    /// The value comparison ignores case; the attribute name does not. This
    /// is a generic primitive: the policy of which attribute/pattern pairs
    /// to drop (remote-URL screening, say) belongs to the caller. Survivors
    /// keep their relative order and are renumbered. No-op when nothing
    /// matches.
    pub fn remove_matching(&mut self, attribute: &str, pattern: &str) {
        self.references
            .retain(|reference| !attribute_value_contains(&reference.raw_tag, attribute, pattern));
    }

    /// Resolved file names for the whole set, in set order.
    ///
    /// References that resolve to no URL (embedded tags) are skipped;
    /// duplicates are kept as-is. Returns `None` when the set itself is
    /// empty, distinguishing "nothing extracted" from "extracted but
    /// nothing resolvable", which yields `Some` of an empty vector.
    #[must_use]
    pub fn file_names(&self) -> Option<Vec<&str>> {
        if self.references.is_empty() {
            return None;
        }
        Some(self.references.iter().filter_map(resolve_url).collect())
    }

    /// Iterate over the references in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.references.iter()
    }
}

impl<'set> IntoIterator for &'set ReferenceSet {
    type Item = &'set Reference;
    type IntoIter = std::slice::Iter<'set, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.references.iter()
    }
}

/// Whether `tag` contains an `attribute="value"` assignment whose quoted
/// value contains `pattern`, ignoring case in the value comparison. An
/// assignment missing its closing quote never matches.
fn attribute_value_contains(tag: &str, attribute: &str, pattern: &str) -> bool {
    let needle = format!("{attribute}=\"");
    let pattern_lower = pattern.to_lowercase();
    let mut rest = tag;
    while let Some(found) = rest.find(&needle) {
        let after = &rest[found + needle.len()..];
        let Some(end) = after.find('"') else {
            break;
        };
        if after[..end].to_lowercase().contains(&pattern_lower) {
            return true;
        }
        rest = &after[end + 1..];
    }
    false
}

#[cfg(test)]
mod tests {
    use super::attribute_value_contains;

    #[test]
    fn test_scan_continues_past_a_non_matching_occurrence() {
        let tag = r#"<link data-href="x" href="https://cdn/a.css">"#;
        assert!(attribute_value_contains(tag, "href", "https"));
    }

    #[test]
    fn test_unterminated_quote_never_matches() {
        assert!(!attribute_value_contains(
            r#"<link href="https://a"#,
            "href",
            "https"
        ));
    }

    #[test]
    fn test_value_comparison_ignores_case() {
        assert!(attribute_value_contains(
            r#"<link href="HTTP://a">"#,
            "href",
            "http"
        ));
    }

    #[test]
    fn test_absent_attribute_never_matches() {
        assert!(!attribute_value_contains(
            r#"<link rel="stylesheet">"#,
            "href",
            "http"
        ));
    }
}
