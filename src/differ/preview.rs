use super::types::{ClassifiedLine, DiffPreview, LineResult, Side};
use crate::constant::{
    DEFAULT_X_MARGIN, DEFAULT_Y_MARGIN, DELETED_COLOR, INSERTED_COLOR, LHS_PADDING_COLOR,
    RHS_PADDING_COLOR, UNCHANGED_COLOR,
};
use egui::{Color32, Pos2, Rect, vec2};
use serde::{Deserialize, Serialize};

/// Colour for each row classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewPalette {
    pub unchanged: Color32,
    pub inserted: Color32,
    pub deleted: Color32,
    pub padding: Color32,
}

impl PreviewPalette {
    pub fn color_for(&self, result: LineResult) -> Color32 {
        match result {
            LineResult::Unchanged => self.unchanged,
            LineResult::Inserted => self.inserted,
            LineResult::Deleted => self.deleted,
            LineResult::Padding => self.padding,
        }
    }

    fn with_padding(padding: Color32) -> Self {
        Self {
            unchanged: UNCHANGED_COLOR,
            inserted: INSERTED_COLOR,
            deleted: DELETED_COLOR,
            padding,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewStyle {
    /// Horizontal inset inside each preview area
    #[serde(default = "default_x_margin")]
    pub x_margin: f32,

    /// Vertical inset inside each preview area
    #[serde(default = "default_y_margin")]
    pub y_margin: f32,

    #[serde(default = "default_lhs_palette")]
    pub lhs_palette: PreviewPalette,

    #[serde(default = "default_rhs_palette")]
    pub rhs_palette: PreviewPalette,
}

impl PreviewStyle {
    pub fn palette(&self, side: Side) -> &PreviewPalette {
        match side {
            Side::Lhs => &self.lhs_palette,
            Side::Rhs => &self.rhs_palette,
        }
    }
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            x_margin: default_x_margin(),
            y_margin: default_y_margin(),
            lhs_palette: default_lhs_palette(),
            rhs_palette: default_rhs_palette(),
        }
    }
}

fn default_x_margin() -> f32 {
    DEFAULT_X_MARGIN
}

fn default_y_margin() -> f32 {
    DEFAULT_Y_MARGIN
}

fn default_lhs_palette() -> PreviewPalette {
    PreviewPalette::with_padding(LHS_PADDING_COLOR)
}

fn default_rhs_palette() -> PreviewPalette {
    PreviewPalette::with_padding(RHS_PADDING_COLOR)
}

/// Scale both sides of a diff into their preview areas.
///
/// Row spacing and line-length scale are shared by both sides so rows stay
/// level with each other and line lengths are comparable across the pair.
pub fn layout(
    lhs: &[ClassifiedLine],
    rhs: &[ClassifiedLine],
    lhs_area: Rect,
    rhs_area: Rect,
    style: &PreviewStyle,
) -> (Vec<DiffPreview>, Vec<DiffPreview>) {
    let rows = lhs.len().max(rhs.len());
    let longest = lhs
        .iter()
        .chain(rhs)
        .map(|line| line.length)
        .max()
        .unwrap_or(0);

    let lhs_previews = layout_side(lhs, lhs_area, rows, longest, style, Side::Lhs);
    let rhs_previews = layout_side(rhs, rhs_area, rows, longest, style, Side::Rhs);
    (lhs_previews, rhs_previews)
}

fn layout_side(
    lines: &[ClassifiedLine],
    area: Rect,
    rows: usize,
    longest: usize,
    style: &PreviewStyle,
    side: Side,
) -> Vec<DiffPreview> {
    let working_width = (area.width() - 2.0 * style.x_margin).max(0.0);
    let working_height = (area.height() - 2.0 * style.y_margin).max(0.0);

    let v_scale = scale(working_height, rows);
    let h_scale = scale(working_width, longest);
    let palette = style.palette(side);
    let origin = area.min + vec2(style.x_margin, style.y_margin);

    lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let start = Pos2::new(origin.x, origin.y + row as f32 * v_scale);
            DiffPreview {
                start,
                end: start + vec2(line.length as f32 * h_scale, 0.0),
                color: palette.color_for(line.result),
            }
        })
        .collect()
}

fn scale(extent: f32, units: usize) -> f32 {
    if units == 0 {
        0.0
    } else {
        extent / units as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn area(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(Pos2::new(x, y), vec2(width, height))
    }

    fn style() -> PreviewStyle {
        PreviewStyle {
            x_margin: 5.0,
            y_margin: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn rows_are_scaled_into_the_area() {
        let lhs = vec![
            ClassifiedLine::unchanged(4),
            ClassifiedLine::deleted(2),
            ClassifiedLine::padding(),
            ClassifiedLine::unchanged(1),
        ];
        let rhs = vec![
            ClassifiedLine::unchanged(4),
            ClassifiedLine::inserted(8),
            ClassifiedLine::inserted(3),
            ClassifiedLine::unchanged(1),
        ];

        // working area: 80 x 80, 4 rows, longest line 8
        let (left, right) = layout(
            &lhs,
            &rhs,
            area(0.0, 0.0, 90.0, 100.0),
            area(100.0, 0.0, 90.0, 100.0),
            &style(),
        );

        assert_eq!(left.len(), 4);
        assert_eq!(left[1].start, Pos2::new(5.0, 30.0));
        assert_eq!(left[1].end, Pos2::new(25.0, 30.0));
        assert_eq!(left[2].start, left[2].end);
        assert_eq!(left[2].color, LHS_PADDING_COLOR);

        assert_eq!(right[1].start, Pos2::new(105.0, 30.0));
        assert_eq!(right[1].end, Pos2::new(185.0, 30.0));
        assert_eq!(right[1].color, INSERTED_COLOR);
        assert_eq!(right[3].start.y, 70.0);
    }

    #[test]
    fn palettes_are_chosen_per_side() {
        let mut style = style();
        style.rhs_palette.padding = Color32::RED;
        let rows = vec![ClassifiedLine::padding()];

        let bounds = area(0.0, 0.0, 50.0, 50.0);

        let (left, right) = layout(&rows, &rows, bounds, bounds, &style);

        assert_eq!(left[0].color, LHS_PADDING_COLOR);
        assert_eq!(right[0].color, Color32::RED);
    }

    #[test]
    fn layout_is_repeatable() {
        let lhs = vec![ClassifiedLine::unchanged(3), ClassifiedLine::deleted(7)];
        let rhs = vec![ClassifiedLine::unchanged(3), ClassifiedLine::padding()];
        let bounds = area(12.0, 8.0, 200.0, 120.0);

        let first = layout(&lhs, &rhs, bounds, bounds, &style());
        let second = layout(&lhs, &rhs, bounds, bounds, &style());

        assert_eq!(first, second);
    }

    #[test]
    fn zero_length_lines_do_not_divide_by_zero() {
        let rows = vec![ClassifiedLine::unchanged(0); 3];

        let bounds = area(0.0, 0.0, 100.0, 100.0);

        let (left, right) = layout(&rows, &rows, bounds, bounds, &style());

        for preview in left.iter().chain(right.iter()) {
            assert!(preview.start.x.is_finite() && preview.start.y.is_finite());
            assert_eq!(preview.start, preview.end);
        }
    }

    #[test]
    fn empty_diff_and_tiny_area() {
        let bounds = area(0.0, 0.0, 100.0, 100.0);
        let (left, right) = layout(&[], &[], bounds, bounds, &style());
        assert!(left.is_empty() && right.is_empty());

        let tiny = area(0.0, 0.0, 4.0, 4.0);
        let rows = vec![ClassifiedLine::deleted(5)];
        let (left, _) = layout(&rows, &rows, tiny, tiny, &style());
        assert_eq!(left[0].start, left[0].end);
    }
}
