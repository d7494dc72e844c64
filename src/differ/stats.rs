use super::types::{ClassifiedLine, LineResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub unchanged: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub lhs_padding: usize,
    pub rhs_padding: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.inserted > 0 || self.deleted > 0
    }

    /// Diff-space rows shared by both sides
    pub fn rows(&self) -> usize {
        self.unchanged + self.deleted + self.lhs_padding
    }
}

/// Count row classifications across both sides of a diff
pub fn calculate_stats(lhs: &[ClassifiedLine], rhs: &[ClassifiedLine]) -> DiffStats {
    let mut stats = DiffStats::default();

    for line in lhs {
        match line.result {
            LineResult::Unchanged => stats.unchanged += 1,
            LineResult::Deleted => stats.deleted += 1,
            LineResult::Padding => stats.lhs_padding += 1,
            LineResult::Inserted => {}
        }
    }

    for line in rhs {
        match line.result {
            LineResult::Inserted => stats.inserted += 1,
            LineResult::Padding => stats.rhs_padding += 1,
            LineResult::Unchanged | LineResult::Deleted => {}
        }
    }

    stats
}
