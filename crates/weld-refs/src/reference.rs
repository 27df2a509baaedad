//! The reference data model.
//!
//! A [`Reference`] is one tag occurrence found in the source document,
//! carrying the exact tag text so later stages can substitute it literally.

use serde::Serialize;
use strum_macros::Display;

/// The two flavors of reference the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum ReferenceKind {
    /// A stylesheet reference found as a `<link ...>` tag.
    Style,
    /// A script reference found as a `<script ...>` tag.
    Script,
}

impl ReferenceKind {
    /// Name of the tag attribute that carries the referenced file for this
    /// kind: `href` for styles, `src` for scripts.
    #[must_use]
    pub const fn url_attribute(self) -> &'static str {
        match self {
            Self::Style => "href",
            Self::Script => "src",
        }
    }
}

/// One reference tag occurrence in a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// The complete tag text exactly as it appears in the source. This is
    /// the substitution key during merging, so it is never trimmed or
    /// normalized.
    pub raw_tag: String,
    /// Which flavor of tag this is, deciding the inline wrapper used when
    /// its payload is merged.
    pub kind: ReferenceKind,
}

impl Reference {
    /// Create a reference from captured tag text.
    #[must_use]
    pub const fn new(raw_tag: String, kind: ReferenceKind) -> Self {
        Self { raw_tag, kind }
    }
}
