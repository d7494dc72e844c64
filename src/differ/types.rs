use egui::{Color32, Pos2};

/// Kind of a contiguous run produced by a line-mode diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Equal,
    Insert,
    Delete,
}

/// A run of whole lines sharing one [`OperationKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOperation {
    pub kind: OperationKind,
    pub text: String,
}

impl DiffOperation {
    pub fn new(kind: OperationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(OperationKind::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(OperationKind::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(OperationKind::Delete, text)
    }

    /// Character length of every line in the run, terminators excluded.
    ///
    /// A trailing segment without `\n` (the last line of a buffer with no
    /// final newline) still counts as a line.
    pub fn line_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        line_lengths(&self.text)
    }

    pub fn line_count(&self) -> usize {
        self.line_lengths().count()
    }
}

pub(crate) fn line_lengths(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.split_inclusive('\n').map(|line| {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.chars().count()
    })
}

/// Classification of a single diff-space row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineResult {
    Unchanged,
    Inserted,
    Deleted,
    Padding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub result: LineResult,
    pub length: usize,
}

impl ClassifiedLine {
    pub fn unchanged(length: usize) -> Self {
        Self {
            result: LineResult::Unchanged,
            length,
        }
    }

    pub fn inserted(length: usize) -> Self {
        Self {
            result: LineResult::Inserted,
            length,
        }
    }

    pub fn deleted(length: usize) -> Self {
        Self {
            result: LineResult::Deleted,
            length,
        }
    }

    pub fn padding() -> Self {
        Self {
            result: LineResult::Padding,
            length: 0,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.result == LineResult::Padding
    }
}

/// Rows of one side of a diff, padded to lock-step with the other side
pub type DiffSequence = Vec<ClassifiedLine>;

/// Which buffer of the pair a query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The original (source) buffer
    Lhs,
    /// The modified (target) buffer
    Rhs,
}

impl Side {
    /// Whether a row of this classification exists in this side's own buffer
    pub fn counts(self, result: LineResult) -> bool {
        match self {
            Side::Lhs => matches!(result, LineResult::Unchanged | LineResult::Deleted),
            Side::Rhs => matches!(result, LineResult::Unchanged | LineResult::Inserted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Changed,
    NoDifference,
}

/// A scaled minimap segment for one diff-space row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffPreview {
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
}
