//! Side-by-side line diffing
//!
//! - `line_diff`: line-mode diff runs (backed by `similar`)
//! - `classify`: lock-step row classification with padding
//! - `position`: original line ⇄ diff-space row translation
//! - `preview`: scaled minimap segments for both sides
//! - `stats`: row counts per classification
//!
//! [`Differ`] ties these together for a pair of buffers.

pub mod classify;
pub mod line_diff;
pub mod position;
pub mod preview;
pub mod stats;
pub mod types;

use crate::buffer::TextBuffer;
use classify::{Classification, classify, unchanged_rows};
use egui::Rect;
use line_diff::{LineDiffAlgorithm, SimilarLineDiff};
use preview::PreviewStyle;
use stats::DiffStats;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use xxhash_rust::xxh64::xxh64;

pub use types::{
    ClassifiedLine, DiffOperation, DiffPreview, DiffSequence, LineResult, OperationKind,
    ProcessOutcome, Side,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DifferError {
    #[error("No buffers bound; call set_buffer_views before process")]
    BuffersNotSet,
}

struct BufferViews {
    lhs: Arc<dyn TextBuffer>,
    rhs: Arc<dyn TextBuffer>,
}

/// Diffs two buffers and keeps the lock-step result for display
pub struct Differ<A = SimilarLineDiff> {
    algorithm: A,
    style: PreviewStyle,
    buffers: Option<BufferViews>,
    lhs_diff: DiffSequence,
    rhs_diff: DiffSequence,
    lhs_preview: Vec<DiffPreview>,
    rhs_preview: Vec<DiffPreview>,
    outcome: Option<ProcessOutcome>,
    /// Hash of the buffer texts behind the current result
    fingerprint: Option<u64>,
}

impl Differ {
    pub fn new() -> Self {
        Self::with_algorithm(SimilarLineDiff::default())
    }
}

impl Default for Differ {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: LineDiffAlgorithm> Differ<A> {
    pub fn with_algorithm(algorithm: A) -> Self {
        Self {
            algorithm,
            style: PreviewStyle::default(),
            buffers: None,
            lhs_diff: Vec::new(),
            rhs_diff: Vec::new(),
            lhs_preview: Vec::new(),
            rhs_preview: Vec::new(),
            outcome: None,
            fingerprint: None,
        }
    }

    pub fn with_style(mut self, style: PreviewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &PreviewStyle {
        &self.style
    }

    /// Replace the preview style. Existing previews are kept until the next
    /// [`Differ::generate_diff_previews`].
    pub fn set_style(&mut self, style: PreviewStyle) {
        self.style = style;
    }

    pub fn set_buffer_views(&mut self, lhs: Arc<dyn TextBuffer>, rhs: Arc<dyn TextBuffer>) {
        self.buffers = Some(BufferViews { lhs, rhs });
    }

    /// Diff the bound buffers and replace the stored result.
    ///
    /// Nothing is touched when this fails. Identical buffers report
    /// [`ProcessOutcome::NoDifference`] but still get one unchanged row per
    /// line on both sides. When the buffer texts are unchanged since the last
    /// run the stored result and previews are kept as they are; otherwise the
    /// result is recomputed and previews from the earlier run are dropped.
    pub fn process(&mut self) -> Result<ProcessOutcome, DifferError> {
        let buffers = self.buffers.as_ref().ok_or(DifferError::BuffersNotSet)?;
        let source = buffers.lhs.text();
        let target = buffers.rhs.text();

        let fingerprint = xxh64(target.as_bytes(), xxh64(source.as_bytes(), 0));
        if self.fingerprint == Some(fingerprint)
            && let Some(outcome) = self.outcome
        {
            debug!("Buffers unchanged since last diff, keeping {:?}", outcome);
            return Ok(outcome);
        }

        let ops = self.algorithm.diff_line_mode(&source, &target);
        let (outcome, lhs, rhs) = match classify(&ops) {
            Classification::Changed { lhs, rhs } => (ProcessOutcome::Changed, lhs, rhs),
            Classification::NoDifference => {
                let rows = unchanged_rows(&source);
                (ProcessOutcome::NoDifference, rows.clone(), rows)
            }
        };

        debug!(
            "Diffed {} operations into {} rows per side ({:?})",
            ops.len(),
            lhs.len(),
            outcome
        );

        self.lhs_diff = lhs;
        self.rhs_diff = rhs;
        self.lhs_preview.clear();
        self.rhs_preview.clear();
        self.outcome = Some(outcome);
        self.fingerprint = Some(fingerprint);

        Ok(outcome)
    }

    /// Drop every derived result and detach the buffers
    pub fn clear(&mut self) {
        self.buffers = None;
        self.lhs_diff.clear();
        self.rhs_diff.clear();
        self.lhs_preview.clear();
        self.rhs_preview.clear();
        self.outcome = None;
        self.fingerprint = None;
    }

    /// Lay out previews of the current result into the given areas.
    /// Safe to call again whenever the areas change.
    pub fn generate_diff_previews(&mut self, lhs_area: Rect, rhs_area: Rect) {
        let (lhs, rhs) = preview::layout(
            &self.lhs_diff,
            &self.rhs_diff,
            lhs_area,
            rhs_area,
            &self.style,
        );
        self.lhs_preview = lhs;
        self.rhs_preview = rhs;
    }

    /// Outcome of the last successful [`Differ::process`]
    pub fn outcome(&self) -> Option<ProcessOutcome> {
        self.outcome
    }

    pub fn lhs_diff(&self) -> &[ClassifiedLine] {
        &self.lhs_diff
    }

    pub fn rhs_diff(&self) -> &[ClassifiedLine] {
        &self.rhs_diff
    }

    pub fn diff(&self, side: Side) -> &[ClassifiedLine] {
        match side {
            Side::Lhs => &self.lhs_diff,
            Side::Rhs => &self.rhs_diff,
        }
    }

    pub fn lhs_diff_preview(&self) -> &[DiffPreview] {
        &self.lhs_preview
    }

    pub fn rhs_diff_preview(&self) -> &[DiffPreview] {
        &self.rhs_preview
    }

    pub fn stats(&self) -> DiffStats {
        stats::calculate_stats(&self.lhs_diff, &self.rhs_diff)
    }

    pub fn original_to_diff_position(&self, side: Side, position: usize) -> Option<usize> {
        position::original_to_diff_position(side, self.diff(side), position)
    }

    pub fn diff_to_original_position(&self, side: Side, diff_index: usize) -> Option<usize> {
        position::diff_to_original_position(self.diff(side), diff_index)
    }

    pub fn original_lhs_file_to_diff_position(&self, position: usize) -> Option<usize> {
        self.original_to_diff_position(Side::Lhs, position)
    }

    pub fn original_rhs_file_to_diff_position(&self, position: usize) -> Option<usize> {
        self.original_to_diff_position(Side::Rhs, position)
    }

    pub fn diff_position_lhs_to_original_position(&self, diff_index: usize) -> Option<usize> {
        self.diff_to_original_position(Side::Lhs, diff_index)
    }

    pub fn diff_position_rhs_to_original_position(&self, diff_index: usize) -> Option<usize> {
        self.diff_to_original_position(Side::Rhs, diff_index)
    }
}
