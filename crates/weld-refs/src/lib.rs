//! Reference scanning for the weld inliner.
//!
//! This crate finds the external stylesheet and script references of an HTML
//! document and keeps them in the ordered collection the merge stage works
//! from. The scan is textual: tags are located by pattern, never by parsing,
//! so the input document is treated as opaque text and survives the round
//! trip byte for byte outside the substituted tags.
//!
//! # Scope
//!
//! - **Extraction** - a two-pass scan that collects every `<link ...>` tag
//!   and then every `<script ...>` tag ([`extract`])
//! - **Resolution** - pulling the quoted `href`/`src` value out of a tag's
//!   text ([`resolve_url`])
//! - **Reference Set** - the ordered, filterable collection backing one
//!   merge run ([`ReferenceSet`])
//!
//! # Known Limitations
//!
//! Because the scan is not a parser, commented-out tags and tags inside
//! string literals are extracted like live ones, and a `<link` prefix with
//! extra trailing letters still matches. Documents that need those cases
//! distinguished need a real HTML parser, which this crate deliberately is
//! not.

/// Reference extraction via pattern matching.
pub mod extract;
/// The reference data model.
pub mod reference;
/// URL resolution from raw tag text.
pub mod resolve;
/// The ordered reference collection.
pub mod set;

pub use extract::extract;
pub use reference::{Reference, ReferenceKind};
pub use resolve::resolve_url;
pub use set::{RefSetError, ReferenceSet};
