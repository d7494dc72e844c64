use super::types::{DiffOperation, OperationKind};
use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Produces a line-mode diff: ordered runs of whole lines
pub trait LineDiffAlgorithm {
    fn diff_line_mode(&self, source: &str, target: &str) -> Vec<DiffOperation>;
}

/// Diff algorithm used by [`SimilarLineDiff`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<LineAlgorithm> for Algorithm {
    fn from(algorithm: LineAlgorithm) -> Self {
        match algorithm {
            LineAlgorithm::Myers => Algorithm::Myers,
            LineAlgorithm::Patience => Algorithm::Patience,
            LineAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Line diff backed by `similar`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarLineDiff {
    algorithm: LineAlgorithm,
}

impl SimilarLineDiff {
    pub fn new(algorithm: LineAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }
}

impl LineDiffAlgorithm for SimilarLineDiff {
    fn diff_line_mode(&self, source: &str, target: &str) -> Vec<DiffOperation> {
        // split on `\n` only; `diff_lines` would also break on a lone `\r`
        let old_lines: Vec<&str> = source.split_inclusive('\n').collect();
        let new_lines: Vec<&str> = target.split_inclusive('\n').collect();
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_slices(&old_lines, &new_lines);

        let mut ops: Vec<DiffOperation> = Vec::new();

        // similar reports one change per line; merge neighbours into runs
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => OperationKind::Equal,
                ChangeTag::Insert => OperationKind::Insert,
                ChangeTag::Delete => OperationKind::Delete,
            };

            match ops.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => ops.push(DiffOperation::new(kind, change.value())),
            }
        }

        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_text_is_one_equal_run() {
        let ops = SimilarLineDiff::default().diff_line_mode("a\nb\nc", "a\nb\nc");
        assert_eq!(ops, vec![DiffOperation::equal("a\nb\nc")]);
    }

    #[test]
    fn insertion_splits_equal_runs() {
        let ops = SimilarLineDiff::default().diff_line_mode("a\nc", "a\nb\nc");
        assert_eq!(
            ops,
            vec![
                DiffOperation::equal("a\n"),
                DiffOperation::insert("b\n"),
                DiffOperation::equal("c"),
            ]
        );
    }

    #[test]
    fn replaced_lines_become_delete_then_insert() {
        let ops = SimilarLineDiff::new(LineAlgorithm::Patience)
            .diff_line_mode("a\nold\nold2\nc\n", "a\nnew\nc\n");
        assert_eq!(
            ops,
            vec![
                DiffOperation::equal("a\n"),
                DiffOperation::delete("old\nold2\n"),
                DiffOperation::insert("new\n"),
                DiffOperation::equal("c\n"),
            ]
        );
    }

    #[test]
    fn lone_carriage_return_stays_inside_its_line() {
        let ops = SimilarLineDiff::default().diff_line_mode("a\rb\nz\n", "a\rc\nz\n");
        assert_eq!(
            ops,
            vec![
                DiffOperation::delete("a\rb\n"),
                DiffOperation::insert("a\rc\n"),
                DiffOperation::equal("z\n"),
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_no_operations() {
        assert!(SimilarLineDiff::default().diff_line_mode("", "").is_empty());
    }
}
