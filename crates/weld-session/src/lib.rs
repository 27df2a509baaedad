//! Merge session orchestration for the weld inliner.
//!
//! A [`MergeSession`] carries one document from scan to merged output: it
//! owns the source text, the filtered reference set, and the payloads
//! collected so far, and it refuses to merge until every loadable reference
//! has its payload. All session state is explicit here; nothing about a run
//! lives in globals.
//!
//! # Scope
//!
//! - **Loading** - scanning a source document and screening out remote
//!   references ([`MergeSession::load`])
//! - **Payload collection** - accepting referenced file contents one
//!   position at a time ([`MergeSession::supply_payload`])
//! - **Merging** - producing the single-file output once collection is
//!   complete ([`MergeSession::merge`])

use thiserror::Error;
use weld_common::warning::clear_warnings;
use weld_merge::{merge_document, merged_file_name};
use weld_refs::{RefSetError, ReferenceSet, resolve_url};
use std::collections::HashMap;

/// Error raised by misusing a [`MergeSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A position lookup failed in the underlying reference set.
    #[error(transparent)]
    Set(#[from] RefSetError),
    /// A payload was supplied for a reference that names no external file.
    #[error("reference {index} has no file to load")]
    NotLoadable {
        /// Position of the reference in the set.
        index: usize,
    },
    /// A payload was supplied twice for the same position.
    #[error("payload for reference {index} already supplied")]
    DuplicatePayload {
        /// Position of the reference in the set.
        index: usize,
    },
    /// A merge was requested while payloads were still outstanding.
    #[error("merge requested with {pending} file(s) still unloaded")]
    Incomplete {
        /// Number of loadable references still without payloads.
        pending: usize,
    },
}

/// What loading a source document produced.
#[derive(Debug)]
pub enum SessionOutcome {
    /// After screening, no reference names a loadable local file. This is
    /// informational, not a failure: there is simply nothing to merge.
    NoReferences,
    /// At least one loadable reference survived; the session is ready to
    /// collect payloads.
    Ready(MergeSession),
}

/// One document's journey from scan to merged output.
#[derive(Debug)]
pub struct MergeSession {
    /// Original source text, untouched until the merge.
    source: String,
    /// Name of the source file; drives the merged output name.
    source_name: String,
    /// Surviving references after remote screening, in extraction order.
    references: ReferenceSet,
    /// Collected payload text keyed by reference position.
    payloads: HashMap<usize, String>,
    /// Loadable references still without payloads; merge unlocks at zero.
    pending: usize,
}

impl MergeSession {
    /// Scan `source` and open a session over its references.
    ///
    /// Extraction collects every link and script tag, then remote screening
    /// drops references whose `href` or `src` value contains `http`, which
    /// covers both plain and TLS URLs. References that survive screening
    /// but resolve to no file name (embedded script bodies) stay in the set
    /// to keep positions stable, but never expect a payload.
    ///
    /// Returns [`SessionOutcome::NoReferences`] when nothing loadable is
    /// left. Any warning state from a previous session is cleared first.
    #[must_use]
    pub fn load(source: String, source_name: String) -> SessionOutcome {
        clear_warnings();
        let mut references = ReferenceSet::from_source(&source);
        references.remove_matching("href", "http");
        references.remove_matching("src", "http");
        let loadable = references
            .iter()
            .filter(|reference| resolve_url(reference).is_some())
            .count();
        if loadable == 0 {
            return SessionOutcome::NoReferences;
        }
        SessionOutcome::Ready(Self {
            source,
            source_name,
            references,
            payloads: HashMap::new(),
            pending: loadable,
        })
    }

    /// The session's reference set, post-screening.
    #[must_use]
    pub const fn references(&self) -> &ReferenceSet {
        &self.references
    }

    /// Name of the source file this session was opened over.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Resolved file names for the whole set, in set order. Nonempty for
    /// any session that loaded as [`SessionOutcome::Ready`].
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.references
            .file_names()
            .unwrap_or_default()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Positions and file names of loadable references still awaiting
    /// payloads, in set order.
    #[must_use]
    pub fn pending_files(&self) -> Vec<(usize, String)> {
        self.references
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.payloads.contains_key(index))
            .filter_map(|(index, reference)| {
                resolve_url(reference).map(|name| (index, name.to_owned()))
            })
            .collect()
    }

    /// Hand the session the contents of the referenced file at `index`.
    ///
    /// The text is stored as supplied; no trimming, no encoding checks.
    /// Each successful call counts one outstanding load down.
    ///
    /// # Errors
    ///
    /// Returns the set's out-of-range error for a position past the end,
    /// [`SessionError::NotLoadable`] for a reference with no file name, and
    /// [`SessionError::DuplicatePayload`] when the position already has its
    /// payload.
    pub fn supply_payload(&mut self, index: usize, text: String) -> Result<(), SessionError> {
        let reference = self.references.get(index)?;
        if resolve_url(reference).is_none() {
            return Err(SessionError::NotLoadable { index });
        }
        if self.payloads.contains_key(&index) {
            return Err(SessionError::DuplicatePayload { index });
        }
        let _ = self.payloads.insert(index, text);
        self.pending -= 1;
        Ok(())
    }

    /// Whether every loadable reference has its payload.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.pending == 0
    }

    /// Produce the merged document text.
    ///
    /// Substitution runs in set order over a copy of the source; the
    /// session itself stays usable afterwards and merging twice yields the
    /// same output.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Incomplete`] while any loadable reference
    /// still lacks its payload. Partial merges are not supported.
    pub fn merge(&self) -> Result<String, SessionError> {
        if self.pending > 0 {
            return Err(SessionError::Incomplete {
                pending: self.pending,
            });
        }
        Ok(merge_document(&self.source, &self.references, &self.payloads))
    }

    /// Output file name derived from the source name.
    #[must_use]
    pub fn merged_output_name(&self) -> String {
        merged_file_name(&self.source_name)
    }
}

/// Build the file-picker prefill text for a list of resolved file names.
///
/// Every `/` in a name becomes `\`, each name is wrapped in double quotes,
/// and the quoted names are joined with single spaces, matching what a
/// native file dialog's name field expects when selecting several files at
/// once.
#[must_use]
pub fn picker_prefill(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name.replace('/', "\\")))
        .collect::<Vec<String>>()
        .join(" ")
}
