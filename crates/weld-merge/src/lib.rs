//! Tag substitution for the weld inliner.
//!
//! This crate turns a scanned document plus its collected payloads into the
//! merged single-file output. Substitution is literal text replacement keyed
//! on the exact tag text the extractor captured, so the rest of the document
//! passes through untouched.
//!
//! # Scope
//!
//! - **Merge Engine** - inlining payloads over their reference tags
//!   ([`merge_document`])
//! - **Output Naming** - deriving the merged file's name from the source
//!   name ([`merged_file_name`])

/// Payload substitution over the source document.
pub mod engine;
/// Merged output file naming.
pub mod output;

pub use engine::{merge_document, wrappers};
pub use output::merged_file_name;
