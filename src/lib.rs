//! chart-legend: legend overlay layout and drawing for 2D charts.
//!
//! Layout is pure geometry over measured label sizes; drawing goes through the
//! [`render::DrawingSurface`] capability trait so any 2D backend can host it.

pub mod core;
pub mod error;
pub mod legend;
pub mod render;
pub mod telemetry;

pub use error::{LegendError, LegendResult};
pub use legend::{LegendContext, LegendEntry, LegendRenderer, LegendStyle, render_legend};
