//! Tag derivation and filtering for the sequence gallery.
//!
//! Both functions are stateless and recomputed per call; no cached index is
//! kept, which is fine at expected collection sizes (tens to low hundreds).

use crate::sequence::model::AnimationSequence;

/// The pseudo-tag selecting the whole collection.
pub const ALL_TAG: &str = "All";

/// Distinct tags across a collection, [`ALL_TAG`] first, then in first-seen
/// order without duplicates.
pub fn distinct_tags(sequences: &[AnimationSequence]) -> Vec<String> {
    let mut tags = vec![ALL_TAG.to_string()];
    for sequence in sequences {
        for tag in sequence.tags.iter().flatten() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Filter a collection by a selected tag, preserving relative order.
///
/// [`ALL_TAG`] is the identity; any other tag keeps sequences whose tag set
/// contains it (exact, case-sensitive match).
pub fn filter_by_tag<'a>(
    sequences: &'a [AnimationSequence],
    selected: &str,
) -> Vec<&'a AnimationSequence> {
    sequences
        .iter()
        .filter(|sequence| {
            selected == ALL_TAG
                || sequence
                    .tags
                    .as_deref()
                    .is_some_and(|tags| tags.iter().any(|t| t == selected))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/filter.rs"]
mod tests;
