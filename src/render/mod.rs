mod frame;
mod primitives;
mod recording_surface;
mod surface;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{
    Color, FontFamily, FontSpec, LineStrokeStyle, Point, Rect, Size, Stroke, TextPrimitive,
};
pub use recording_surface::RecordingSurface;
pub use surface::{DrawingSurface, HeuristicTextMeasurer, TextMeasurer};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
