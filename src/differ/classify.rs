use super::types::{ClassifiedLine, DiffOperation, DiffSequence, OperationKind};

/// Result of classifying a line-mode operation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Empty input, or a single equal run covering both buffers
    NoDifference,
    Changed { lhs: DiffSequence, rhs: DiffSequence },
}

/// Turn ordered diff operations into two row-aligned sequences.
///
/// A delete run is held back until the next operation: a following insert is
/// paired against it row by row, and whichever side is shorter gets padding.
/// An equal run (or the end of input) pads the right side for any deletes
/// still waiting, so both sequences always end up the same length.
pub fn classify(ops: &[DiffOperation]) -> Classification {
    if ops.is_empty() || (ops.len() == 1 && ops[0].kind == OperationKind::Equal) {
        return Classification::NoDifference;
    }

    let mut lhs = DiffSequence::new();
    let mut rhs = DiffSequence::new();
    let mut last_delete_lines = 0usize;

    for op in ops {
        match op.kind {
            OperationKind::Delete => {
                let before = lhs.len();
                lhs.extend(op.line_lengths().map(ClassifiedLine::deleted));
                // consecutive deletes keep accumulating until something pairs with them
                last_delete_lines += lhs.len() - before;
            }
            OperationKind::Insert => {
                let before = rhs.len();
                rhs.extend(op.line_lengths().map(ClassifiedLine::inserted));
                let inserted = rhs.len() - before;

                if inserted < last_delete_lines {
                    pad(&mut rhs, last_delete_lines - inserted);
                } else {
                    // covers the unpaired case too, where last_delete_lines is 0
                    pad(&mut lhs, inserted - last_delete_lines);
                }
                last_delete_lines = 0;
            }
            OperationKind::Equal => {
                pad(&mut rhs, last_delete_lines);
                last_delete_lines = 0;

                for length in op.line_lengths() {
                    lhs.push(ClassifiedLine::unchanged(length));
                    rhs.push(ClassifiedLine::unchanged(length));
                }
            }
        }
    }

    pad(&mut rhs, last_delete_lines);

    debug_assert_eq!(lhs.len(), rhs.len());
    Classification::Changed { lhs, rhs }
}

/// Both sides of an identical pair of buffers, one unchanged row per line
pub fn unchanged_rows(text: &str) -> DiffSequence {
    super::types::line_lengths(text)
        .map(ClassifiedLine::unchanged)
        .collect()
}

fn pad(sequence: &mut DiffSequence, rows: usize) {
    sequence.extend(std::iter::repeat_n(ClassifiedLine::padding(), rows));
}
