//! Marker glyphs drawn in legend rows.
//!
//! Each [`MarkerGlyphKind`] maps to a [`GlyphRenderer`] in a [`GlyphRegistry`].
//! Hosts can swap in their own renderer for a kind without touching the row
//! renderer.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::LegendResult;
use crate::render::{Color, DrawingSurface, FontSpec, Point, Rect, Size, Stroke};

use super::MarkerGlyphKind;

/// Outline width used by open glyphs.
pub const GLYPH_STROKE_WIDTH_PX: f64 = 1.0;

const SIN_60: f64 = 0.866;
const COS_60: f64 = 0.5;

/// Geometry shared by every glyph of one legend row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    /// Square of side `font_size / 2`.
    pub bounds: Rect,
    pub center: Point,
    /// Legend font; character glyphs switch it to monospace.
    pub font: FontSpec,
    pub row_origin: Point,
    pub row_height: f64,
}

impl GlyphBox {
    /// Glyph box for the row whose label starts at `row_origin`.
    #[must_use]
    pub fn for_row(
        row_origin: Point,
        padding: f64,
        stub_width: f64,
        font: FontSpec,
        row_height: f64,
    ) -> Self {
        let quarter = font.size_pt / 4.0;
        let corner = Point::new(
            row_origin.x - stub_width + quarter,
            row_origin.y + quarter * padding,
        );
        let side = font.size_pt / 2.0;
        Self {
            bounds: Rect::new(corner, Size::new(side, side)),
            center: corner.offset(quarter, quarter),
            font,
            row_origin,
            row_height,
        }
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font.size_pt
    }
}

pub trait GlyphRenderer {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFill {
    Filled,
    Outlined,
}

/// A single character in the fixed-width font, e.g. `*` or `+`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterGlyph {
    pub symbol: char,
    /// Drop below the row origin as a fraction of the row height.
    pub row_height_fraction: f64,
}

impl CharacterGlyph {
    #[must_use]
    pub const fn new(symbol: char, row_height_fraction: f64) -> Self {
        Self {
            symbol,
            row_height_fraction,
        }
    }
}

impl GlyphRenderer for CharacterGlyph {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        let origin = Point::new(
            glyph.bounds.origin.x,
            (glyph.row_origin.y + glyph.row_height * self.row_height_fraction).trunc(),
        );
        let mut buffer = [0_u8; 4];
        surface.draw_text(
            self.symbol.encode_utf8(&mut buffer),
            origin,
            glyph.font.monospace(),
            color,
        )
    }
}

/// Ellipse inscribed in the glyph box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipseGlyph(pub GlyphFill);

impl GlyphRenderer for EllipseGlyph {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        match self.0 {
            GlyphFill::Filled => surface.fill_ellipse(glyph.bounds, color),
            GlyphFill::Outlined => surface.stroke_ellipse(glyph.bounds, outline(color)),
        }
    }
}

/// The glyph box itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGlyph(pub GlyphFill);

impl GlyphRenderer for SquareGlyph {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        match self.0 {
            GlyphFill::Filled => surface.fill_rect(glyph.bounds, color),
            GlyphFill::Outlined => surface.stroke_rect(glyph.bounds, outline(color)),
        }
    }
}

/// Rhombus through the box edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiamondGlyph(pub GlyphFill);

impl DiamondGlyph {
    /// South, west, north, east of the center at radius `font_size / 4`.
    #[must_use]
    pub fn points(glyph: &GlyphBox) -> [Point; 4] {
        let radius = glyph.font_size() / 4.0;
        let center = glyph.center;
        [
            center.offset(0.0, radius),
            center.offset(-radius, 0.0),
            center.offset(0.0, -radius),
            center.offset(radius, 0.0),
        ]
    }
}

impl GlyphRenderer for DiamondGlyph {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        let points = Self::points(glyph);
        match self.0 {
            GlyphFill::Filled => surface.fill_polygon(&points, color),
            GlyphFill::Outlined => surface.stroke_polygon(&points, outline(color)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriPointing {
    Up,
    Down,
}

/// Three spokes from the box center, traced as one closed outline that
/// revisits the center between spokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriGlyph(pub TriPointing);

impl TriGlyph {
    #[must_use]
    pub fn points(&self, glyph: &GlyphBox) -> SmallVec<[Point; 6]> {
        let radius = glyph.font_size() / 2.0;
        let flip = match self.0 {
            TriPointing::Up => 1.0,
            TriPointing::Down => -1.0,
        };
        let center = glyph.center;
        SmallVec::from_buf([
            center,
            center.offset(0.0, -radius * flip),
            center,
            center.offset(-radius * SIN_60, radius * COS_60 * flip),
            center,
            center.offset(radius * SIN_60, radius * COS_60 * flip),
        ])
    }
}

impl GlyphRenderer for TriGlyph {
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        surface.stroke_polygon(&self.points(glyph), outline(color))
    }
}

fn outline(color: Color) -> Stroke {
    Stroke::solid(color, GLYPH_STROKE_WIDTH_PX)
}

/// Lookup from marker kind to the renderer that draws it.
pub struct GlyphRegistry {
    renderers: IndexMap<MarkerGlyphKind, Box<dyn GlyphRenderer>>,
}

impl GlyphRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            renderers: IndexMap::new(),
        }
    }

    /// Registry with a renderer for every drawable [`MarkerGlyphKind`].
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(MarkerGlyphKind::Asterisk, CharacterGlyph::new('*', 0.25));
        registry.register(MarkerGlyphKind::Cross, CharacterGlyph::new('+', 0.125));
        registry.register(MarkerGlyphKind::Eks, CharacterGlyph::new('x', 0.0));
        registry.register(MarkerGlyphKind::HashTag, CharacterGlyph::new('#', 0.125));
        registry.register(MarkerGlyphKind::VerticalBar, CharacterGlyph::new('|', 0.0));
        registry.register(MarkerGlyphKind::FilledCircle, EllipseGlyph(GlyphFill::Filled));
        registry.register(MarkerGlyphKind::OpenCircle, EllipseGlyph(GlyphFill::Outlined));
        registry.register(MarkerGlyphKind::FilledSquare, SquareGlyph(GlyphFill::Filled));
        registry.register(MarkerGlyphKind::OpenSquare, SquareGlyph(GlyphFill::Outlined));
        registry.register(MarkerGlyphKind::FilledDiamond, DiamondGlyph(GlyphFill::Filled));
        registry.register(MarkerGlyphKind::OpenDiamond, DiamondGlyph(GlyphFill::Outlined));
        registry.register(MarkerGlyphKind::TriUp, TriGlyph(TriPointing::Up));
        registry.register(MarkerGlyphKind::TriDown, TriGlyph(TriPointing::Down));
        registry
    }

    /// Installs `renderer` for `kind`, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: MarkerGlyphKind,
        renderer: impl GlyphRenderer + 'static,
    ) -> Option<Box<dyn GlyphRenderer>> {
        self.renderers.insert(kind, Box::new(renderer))
    }

    #[must_use]
    pub fn get(&self, kind: MarkerGlyphKind) -> Option<&dyn GlyphRenderer> {
        self.renderers.get(&kind).map(|renderer| &**renderer)
    }

    #[must_use]
    pub fn contains(&self, kind: MarkerGlyphKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = MarkerGlyphKind> + '_ {
        self.renderers.keys().copied()
    }

    /// Draws `kind` into `glyph`; `None` and unregistered kinds draw nothing.
    pub fn draw(
        &self,
        kind: MarkerGlyphKind,
        surface: &mut dyn DrawingSurface,
        glyph: &GlyphBox,
        color: Color,
    ) -> LegendResult<()> {
        if kind == MarkerGlyphKind::None {
            return Ok(());
        }
        match self.get(kind) {
            Some(renderer) => renderer.draw(surface, glyph, color),
            None => {
                trace!(?kind, "no glyph renderer registered");
                Ok(())
            }
        }
    }
}

impl Default for GlyphRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for GlyphRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphRegistry")
            .field("kinds", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}
