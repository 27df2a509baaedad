//! Property tests for the extraction pipeline.

// Quickcheck properties take owned arguments by contract.
#![allow(clippy::needless_pass_by_value)]

use quickcheck_macros::quickcheck;
use weld_refs::{ReferenceKind, ReferenceSet, extract};

#[quickcheck]
fn prop_source_without_angle_brackets_has_no_references(input: String) -> bool {
    let cleaned: String = input.chars().filter(|&c| c != '<').collect();
    extract(&cleaned).is_empty()
}

#[quickcheck]
fn prop_raw_tags_are_substrings_of_the_source(input: String) -> bool {
    extract(&input)
        .iter()
        .all(|reference| input.contains(&reference.raw_tag))
}

#[quickcheck]
fn prop_styles_always_precede_scripts(input: String) -> bool {
    let kinds: Vec<ReferenceKind> = extract(&input)
        .into_iter()
        .map(|reference| reference.kind)
        .collect();
    match kinds.iter().position(|&kind| kind == ReferenceKind::Script) {
        Some(first_script) => kinds[first_script..]
            .iter()
            .all(|&kind| kind == ReferenceKind::Script),
        None => true,
    }
}

#[quickcheck]
fn prop_file_names_never_exceed_set_length(input: String) -> bool {
    let set = ReferenceSet::from_source(&input);
    set.file_names()
        .is_none_or(|names| names.len() <= set.len())
}
