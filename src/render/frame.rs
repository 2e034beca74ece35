use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::{LegendError, LegendResult};
use crate::render::{Color, DrawingSurface, Point, Rect, Stroke, TextPrimitive};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    FillEllipse { bounds: Rect, color: Color },
    StrokeEllipse { bounds: Rect, stroke: Stroke },
    FillPolygon { points: SmallVec<[Point; 6]>, color: Color },
    StrokePolygon { points: SmallVec<[Point; 6]>, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> LegendResult<()> {
        match self {
            Self::FillRect { rect, color } => {
                rect.validate()?;
                color.validate()
            }
            Self::StrokeRect { rect, stroke } => {
                rect.validate()?;
                stroke.validate()
            }
            Self::FillEllipse { bounds, color } => {
                bounds.validate()?;
                color.validate()
            }
            Self::StrokeEllipse { bounds, stroke } => {
                bounds.validate()?;
                stroke.validate()
            }
            Self::FillPolygon { points, color } => {
                validate_points(points)?;
                color.validate()
            }
            Self::StrokePolygon { points, stroke } => {
                validate_points(points)?;
                stroke.validate()
            }
            Self::Line { from, to, stroke } => {
                if !from.is_finite() || !to.is_finite() {
                    return Err(LegendError::InvalidData(
                        "line coordinates must be finite".to_owned(),
                    ));
                }
                stroke.validate()
            }
            Self::Text(text) => text.validate(),
        }
    }

    /// Re-issues this command on `surface`.
    pub fn apply(&self, surface: &mut dyn DrawingSurface) -> LegendResult<()> {
        match self {
            Self::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            Self::StrokeRect { rect, stroke } => surface.stroke_rect(*rect, *stroke),
            Self::FillEllipse { bounds, color } => surface.fill_ellipse(*bounds, *color),
            Self::StrokeEllipse { bounds, stroke } => surface.stroke_ellipse(*bounds, *stroke),
            Self::FillPolygon { points, color } => surface.fill_polygon(points, *color),
            Self::StrokePolygon { points, stroke } => surface.stroke_polygon(points, *stroke),
            Self::Line { from, to, stroke } => surface.draw_line(*from, *to, *stroke),
            Self::Text(text) => surface.draw_text(&text.text, text.origin, text.font, text.color),
        }
    }
}

fn validate_points(points: &[Point]) -> LegendResult<()> {
    if points.len() < 2 {
        return Err(LegendError::InvalidData(
            "polygon needs at least two points".to_owned(),
        ));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(LegendError::InvalidData(
            "polygon coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Backend-agnostic record of one legend draw pass, in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn validate(&self) -> LegendResult<()> {
        if !self.viewport.is_valid() {
            return Err(LegendError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text commands in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Draws the recorded commands onto another surface.
    pub fn replay(&self, surface: &mut dyn DrawingSurface) -> LegendResult<()> {
        self.validate()?;
        for command in &self.commands {
            command.apply(surface)?;
        }
        Ok(())
    }
}
