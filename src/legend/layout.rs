//! Anchor-dependent legend geometry.
//!
//! All placement happens in whole plot-surface pixels: results truncate toward
//! zero and halving of pixel sizes is integer halving.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::{DrawingSurface, FontSpec, Point, Rect, Size};

use super::{AnchorLocation, LegendEntry, ShadowDirection};

/// Largest measured label box across labeled entries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RowMetrics {
    pub max_label_width: f64,
    pub max_label_height: f64,
}

impl RowMetrics {
    pub const ZERO: Self = Self {
        max_label_width: 0.0,
        max_label_height: 0.0,
    };

    /// Vertical distance between consecutive legend rows.
    #[must_use]
    pub fn row_height(self) -> f64 {
        self.max_label_height
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.max_label_width == 0.0 && self.max_label_height == 0.0
    }
}

/// Frame and text placement for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub frame_origin: Point,
    pub frame_size: Size,
    /// Text origin one row below the bottom row; rows stack upward from here.
    pub text_origin: Point,
    /// Absent when the shadow direction is `none`.
    pub shadow_origin: Option<Point>,
}

impl LayoutResult {
    #[must_use]
    pub fn frame_rect(&self) -> Rect {
        Rect::new(self.frame_origin, self.frame_size)
    }

    #[must_use]
    pub fn shadow_rect(&self) -> Option<Rect> {
        self.shadow_origin
            .map(|origin| Rect::new(origin, self.frame_size))
    }

    /// Text origin of `row` (0 = top) in a legend of `row_count` rows.
    #[must_use]
    pub fn row_text_origin(&self, row: usize, row_count: usize, row_height: f64) -> Point {
        let rows_above_origin = row_count.saturating_sub(row) as f64;
        Point::new(
            self.text_origin.x,
            self.text_origin.y - row_height.trunc() * rows_above_origin,
        )
    }
}

/// Measures every labeled entry and keeps the componentwise maximum.
///
/// Unlabeled entries are never measured; no labels yields [`RowMetrics::ZERO`].
#[must_use]
pub fn measure_rows(
    entries: &[LegendEntry],
    font: FontSpec,
    surface: &dyn DrawingSurface,
) -> RowMetrics {
    let (width, height) = entries
        .iter()
        .filter_map(LegendEntry::label)
        .map(|label| surface.measure_text(label, font))
        .fold(
            (OrderedFloat(0.0), OrderedFloat(0.0)),
            |(width, height), size| {
                (
                    width.max(OrderedFloat(size.width)),
                    height.max(OrderedFloat(size.height)),
                )
            },
        );
    RowMetrics {
        max_label_width: width.into_inner(),
        max_label_height: height.into_inner(),
    }
}

/// Outer frame size for `row_count` rows.
///
/// `width = 2p + max_label_width + p + stub`, `height = 2p + row_height * rows`.
#[must_use]
pub fn frame_size(metrics: RowMetrics, row_count: usize, padding: f64, stub_width: f64) -> Size {
    let width = padding * 2.0 + metrics.max_label_width + padding + stub_width;
    let height = padding * 2.0 + metrics.row_height() * row_count as f64;
    Size::new(width.trunc(), height.trunc())
}

/// Places the frame, text column and shadow for `anchor`.
///
/// Returns `None` for [`AnchorLocation::None`]; nothing is drawn in that case.
#[must_use]
pub fn compute_layout(
    anchor: AnchorLocation,
    plot_area: Viewport,
    padding: f64,
    frame_size: Size,
    max_label_width: f64,
    shadow: ShadowDirection,
) -> Option<LayoutResult> {
    let area_width = plot_area.width_px();
    let area_height = plot_area.height_px();
    let half_width = plot_area.half_width_px();
    let half_height = plot_area.half_height_px();
    let frame_width = frame_size.width;
    let frame_height = frame_size.height;

    let left_x = padding;
    let right_x = area_width - frame_width - padding;
    let center_x = half_width - half(frame_width) - padding * 5.0;

    let top_y = padding;
    let bottom_y = area_height - frame_height - padding;
    let middle_y = half_height - half(frame_height) - padding;

    let left_text_x = frame_width - max_label_width + padding;
    let right_text_x = area_width - (max_label_width + padding);
    let center_text_x = half_width - max_label_width / 2.0 + half(padding);

    let top_text_y = frame_height;
    let bottom_text_y = area_height - padding * 2.0;
    let middle_text_y = half_height + half(frame_height) - padding * 2.0;

    let (frame_x, frame_y, text_x, text_y) = match anchor {
        AnchorLocation::None => return None,
        AnchorLocation::UpperLeft => (left_x, top_y, left_text_x, top_text_y),
        AnchorLocation::MiddleLeft => (left_x, middle_y, left_text_x, middle_text_y),
        AnchorLocation::LowerLeft => (left_x, bottom_y, left_text_x, bottom_text_y),
        AnchorLocation::UpperRight => (right_x, top_y, right_text_x, top_text_y),
        AnchorLocation::MiddleRight => (right_x, middle_y, right_text_x, middle_text_y),
        AnchorLocation::LowerRight => (right_x, bottom_y, right_text_x, bottom_text_y),
        AnchorLocation::UpperCenter => (center_x, top_y, center_text_x, top_text_y),
        AnchorLocation::LowerCenter => (center_x, bottom_y, center_text_x, bottom_text_y),
    };

    let frame_origin = Point::new(frame_x.trunc(), frame_y.trunc());
    let text_origin = Point::new(text_x.trunc(), text_y.trunc() + padding.trunc());
    let shadow_origin = shadow
        .offset()
        .map(|(dx, dy)| frame_origin.offset(dx, dy));

    Some(LayoutResult {
        frame_origin,
        frame_size,
        text_origin,
        shadow_origin,
    })
}

fn half(value: f64) -> f64 {
    (value / 2.0).trunc()
}

#[cfg(test)]
mod tests {
    use super::{LayoutResult, RowMetrics, frame_size, half};
    use crate::render::{Point, Size};

    #[test]
    fn frame_size_truncates_fractional_label_width() {
        let metrics = RowMetrics {
            max_label_width: 40.7,
            max_label_height: 16.0,
        };
        assert_eq!(frame_size(metrics, 2, 3.0, 40.0), Size::new(89.0, 38.0));
        assert_eq!(frame_size(RowMetrics::ZERO, 0, 3.0, 40.0), Size::new(49.0, 6.0));
    }

    #[test]
    fn half_truncates_odd_values() {
        assert_eq!(half(3.0), 1.0);
        assert_eq!(half(86.0), 43.0);
    }

    #[test]
    fn rows_stack_upward_from_text_origin() {
        let layout = LayoutResult {
            frame_origin: Point::new(0.0, 0.0),
            frame_size: Size::new(10.0, 10.0),
            text_origin: Point::new(5.0, 100.0),
            shadow_origin: None,
        };
        assert_eq!(layout.row_text_origin(0, 3, 16.0), Point::new(5.0, 52.0));
        assert_eq!(layout.row_text_origin(2, 3, 16.0), Point::new(5.0, 84.0));
    }
}
