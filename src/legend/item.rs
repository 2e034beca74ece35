use crate::error::LegendResult;
use crate::render::{DrawingSurface, LineStrokeStyle, Point, Stroke};

use super::{GlyphBox, GlyphRegistry, LegendEntry, LegendStyle};

pub const CONNECTOR_WIDTH_PX: f64 = 1.0;
pub const BAND_CONNECTOR_WIDTH_PX: f64 = 10.0;

/// Per-pass constants every row is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub padding: f64,
    pub stub_width: f64,
    pub row_height: f64,
}

/// Pen for an entry's connector swatch.
///
/// Band series use a wide stroke; entries without a line style draw solid.
#[must_use]
pub fn connector_stroke(entry: &LegendEntry) -> Stroke {
    let width = if entry.is_band_series {
        BAND_CONNECTOR_WIDTH_PX
    } else {
        CONNECTOR_WIDTH_PX
    };
    Stroke::solid(entry.color, width)
        .with_style(entry.line_style.unwrap_or(LineStrokeStyle::Solid))
}

/// Draws the label, connector and marker of one legend row.
#[derive(Debug, Clone, Copy)]
pub struct ItemRenderer<'a> {
    style: &'a LegendStyle,
    glyphs: &'a GlyphRegistry,
}

impl<'a> ItemRenderer<'a> {
    #[must_use]
    pub fn new(style: &'a LegendStyle, glyphs: &'a GlyphRegistry) -> Self {
        Self { style, glyphs }
    }

    pub fn draw_row(
        &self,
        surface: &mut dyn DrawingSurface,
        entry: &LegendEntry,
        origin: Point,
        geometry: RowGeometry,
    ) -> LegendResult<()> {
        self.draw_label(surface, entry, origin)?;
        self.draw_connector(surface, entry, origin, geometry)?;
        self.draw_marker(surface, entry, origin, geometry)
    }

    /// Label text with its top-left corner at `origin`.
    pub fn draw_label(
        &self,
        surface: &mut dyn DrawingSurface,
        entry: &LegendEntry,
        origin: Point,
    ) -> LegendResult<()> {
        let Some(label) = entry.label() else {
            return Ok(());
        };
        surface.draw_text(label, origin, self.style.font, self.style.text_color)
    }

    /// Horizontal swatch ending `padding` left of the label, vertically centered in the row.
    pub fn draw_connector(
        &self,
        surface: &mut dyn DrawingSurface,
        entry: &LegendEntry,
        origin: Point,
        geometry: RowGeometry,
    ) -> LegendResult<()> {
        let y = origin.y + geometry.row_height / 2.0;
        let start_x = origin.x - geometry.padding;
        let end_x = start_x - geometry.stub_width;
        surface.draw_line(
            Point::new(start_x, y),
            Point::new(end_x, y),
            connector_stroke(entry),
        )
    }

    pub fn draw_marker(
        &self,
        surface: &mut dyn DrawingSurface,
        entry: &LegendEntry,
        origin: Point,
        geometry: RowGeometry,
    ) -> LegendResult<()> {
        let glyph = GlyphBox::for_row(
            origin,
            geometry.padding,
            geometry.stub_width,
            self.style.font,
            geometry.row_height,
        );
        self.glyphs.draw(entry.marker, surface, &glyph, entry.color)
    }
}
