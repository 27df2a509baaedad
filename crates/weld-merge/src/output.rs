//! Merged output file naming.

/// Suffix that marks a merged output file.
const MERGED_SUFFIX: &str = "Merged.html";
/// Extension the suffix substitutes when present in the source name.
const HTML_EXT: &str = ".html";

/// Derive the output file name for a merged document.
///
/// The first `.html` in `source_name` becomes `Merged.html`, so `index.html`
/// yields `indexMerged.html`. A name without `.html` anywhere gets the
/// suffix appended instead: `page` yields `pageMerged.html`. Only the first
/// occurrence is rewritten, so `a.html.html` yields `aMerged.html.html`.
#[must_use]
pub fn merged_file_name(source_name: &str) -> String {
    if source_name.contains(HTML_EXT) {
        source_name.replacen(HTML_EXT, MERGED_SUFFIX, 1)
    } else {
        format!("{source_name}{MERGED_SUFFIX}")
    }
}
