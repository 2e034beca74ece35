//! Legend overlay: layout, per-row items and marker glyphs.
//!
//! The flow is top-down: [`LegendRenderer`] filters and orders entries, asks
//! the layout functions where the frame goes, then hands each row to
//! [`ItemRenderer`], which dispatches marker drawing through a
//! [`GlyphRegistry`].

mod config;
mod glyph;
mod item;
mod layout;
mod model;
mod renderer;
mod style;

pub use config::{LEGEND_CONFIG_JSON_SCHEMA_V1, LegendConfig};
pub use glyph::{
    CharacterGlyph, DiamondGlyph, EllipseGlyph, GLYPH_STROKE_WIDTH_PX, GlyphBox, GlyphFill,
    GlyphRegistry, GlyphRenderer, SquareGlyph, TriGlyph, TriPointing,
};
pub use item::{
    BAND_CONNECTOR_WIDTH_PX, CONNECTOR_WIDTH_PX, ItemRenderer, RowGeometry, connector_stroke,
};
pub use layout::{LayoutResult, RowMetrics, compute_layout, frame_size, measure_rows};
pub use model::{AnchorLocation, LegendEntry, MarkerGlyphKind, ShadowDirection};
pub use renderer::{FRAME_BORDER_WIDTH_PX, LegendPlan, LegendRenderer, render_legend};
pub use style::{LEGEND_PADDING_PX, LegendContext, LegendStyle, STUB_WIDTH_PER_12PT_PX};
