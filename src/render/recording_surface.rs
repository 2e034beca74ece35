use std::cell::Cell;

use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::LegendResult;
use crate::render::{
    Color, DrawCommand, DrawingSurface, FontSpec, HeuristicTextMeasurer, Point, Rect, RenderFrame,
    Size, Stroke, TextMeasurer, TextPrimitive,
};

/// Headless surface that records every call into a [`RenderFrame`].
///
/// It still validates each command so tests catch invalid geometry before a
/// real backend sees it.
pub struct RecordingSurface<M = HeuristicTextMeasurer> {
    measurer: M,
    frame: RenderFrame,
    measure_calls: Cell<usize>,
}

impl RecordingSurface<HeuristicTextMeasurer> {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_measurer(viewport, HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> RecordingSurface<M> {
    #[must_use]
    pub fn with_measurer(viewport: Viewport, measurer: M) -> Self {
        Self {
            measurer,
            frame: RenderFrame::new(viewport),
            measure_calls: Cell::new(0),
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    /// Number of draw calls recorded so far (measurement excluded).
    #[must_use]
    pub fn draw_call_count(&self) -> usize {
        self.frame.commands.len()
    }

    #[must_use]
    pub fn measure_call_count(&self) -> usize {
        self.measure_calls.get()
    }

    fn record(&mut self, command: DrawCommand) -> LegendResult<()> {
        command.validate()?;
        self.frame.commands.push(command);
        Ok(())
    }
}

impl<M: TextMeasurer> DrawingSurface for RecordingSurface<M> {
    fn measure_text(&self, text: &str, font: FontSpec) -> Size {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.measurer.measure(text, font)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> LegendResult<()> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> LegendResult<()> {
        self.record(DrawCommand::StrokeRect { rect, stroke })
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) -> LegendResult<()> {
        self.record(DrawCommand::FillEllipse { bounds, color })
    }

    fn stroke_ellipse(&mut self, bounds: Rect, stroke: Stroke) -> LegendResult<()> {
        self.record(DrawCommand::StrokeEllipse { bounds, stroke })
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> LegendResult<()> {
        self.record(DrawCommand::FillPolygon {
            points: SmallVec::from_slice(points),
            color,
        })
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) -> LegendResult<()> {
        self.record(DrawCommand::StrokePolygon {
            points: SmallVec::from_slice(points),
            stroke,
        })
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> LegendResult<()> {
        self.record(DrawCommand::Line { from, to, stroke })
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> LegendResult<()> {
        self.record(DrawCommand::Text(TextPrimitive::new(text, origin, font, color)))
    }
}
