use crate::error::LegendResult;
use crate::render::{Color, FontSpec, Point, Rect, Size, Stroke};

/// Drawing capabilities the legend needs from a 2D backend.
///
/// Coordinates are plot-surface pixels with the origin at the top-left.
/// Implementations own their resources; callers pass plain value types and
/// never keep a reference to the surface across calls.
pub trait DrawingSurface {
    /// Measures the box occupied by `text` when drawn with `font`.
    fn measure_text(&self, text: &str, font: FontSpec) -> Size;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> LegendResult<()>;

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> LegendResult<()>;

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Color) -> LegendResult<()>;

    fn stroke_ellipse(&mut self, bounds: Rect, stroke: Stroke) -> LegendResult<()>;

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> LegendResult<()>;

    /// Strokes the closed outline through `points`.
    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) -> LegendResult<()>;

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> LegendResult<()>;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> LegendResult<()>;
}

/// Text measurement hook for surfaces without their own font metrics.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> Size;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, FontSpec) -> Size,
{
    fn measure(&self, text: &str, font: FontSpec) -> Size {
        self(text, font)
    }
}

/// Rough metrics: 0.6 em per character, 1 em tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> Size {
        let width = 0.6 * font.size_pt * text.chars().count() as f64;
        Size::new(width, font.size_pt)
    }
}
