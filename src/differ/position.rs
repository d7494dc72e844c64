//! Translation between original buffer lines and diff-space rows.
//!
//! Both directions accept the one-past-the-end position so an end-of-file
//! cursor maps cleanly; anything further out yields `None`.

use super::types::{ClassifiedLine, Side};

/// Diff-space row holding line `position` of `side`'s own buffer
pub fn original_to_diff_position(
    side: Side,
    sequence: &[ClassifiedLine],
    position: usize,
) -> Option<usize> {
    let mut counter = 0usize;

    for (index, line) in sequence.iter().enumerate() {
        if !side.counts(line.result) {
            continue;
        }
        if counter == position {
            return Some(index);
        }
        counter += 1;
    }

    (counter == position).then_some(sequence.len())
}

/// Original line number of diff-space row `diff_index`.
///
/// A padding row maps to the line that follows it.
pub fn diff_to_original_position(sequence: &[ClassifiedLine], diff_index: usize) -> Option<usize> {
    let preceding = sequence.get(..diff_index)?;
    let padding = preceding.iter().filter(|line| line.is_padding()).count();

    Some(diff_index - padding)
}
