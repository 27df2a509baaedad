//! URL resolution from raw tag text.

use lazy_static::lazy_static;
use regex::Regex;
use crate::reference::{Reference, ReferenceKind};

lazy_static! {
    // First double-quoted `href` value in a tag. Attribute names match
    // case-sensitively, unlike tag names during extraction.
    static ref HREF_VALUE: Regex = Regex::new(r#"href="([^"]*)""#).unwrap();
    // First double-quoted `src` value in a tag.
    static ref SRC_VALUE: Regex = Regex::new(r#"src="([^"]*)""#).unwrap();
}

/// Extract the referenced file name from a reference tag.
///
/// Searches the tag text for the attribute that names the external file
/// (`href` for styles, `src` for scripts) and returns the quoted value
/// verbatim: no URL decoding, no path normalization, no trimming. The value
/// runs to the next `"`, so an embedded quote truncates it.
///
/// Returns `None` when the tag carries no such attribute, which is how an
/// embedded `<script>` body presents itself. The search is textual and
/// matches the attribute text anywhere in the tag, so a `data-src="..."`
/// assignment satisfies a `src` lookup.
#[must_use]
pub fn resolve_url(reference: &Reference) -> Option<&str> {
    let captures = match reference.kind {
        ReferenceKind::Style => HREF_VALUE.captures(&reference.raw_tag),
        ReferenceKind::Script => SRC_VALUE.captures(&reference.raw_tag),
    };
    let value = captures?.get(1)?;
    Some(value.as_str())
}
