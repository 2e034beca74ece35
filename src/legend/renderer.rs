use tracing::{debug, trace};

use crate::error::LegendResult;
use crate::render::{DrawingSurface, Stroke};

use super::{
    GlyphRegistry, ItemRenderer, LEGEND_PADDING_PX, LayoutResult, LegendContext, LegendEntry,
    RowGeometry, RowMetrics, compute_layout, frame_size, measure_rows,
};

/// Frame border width.
pub const FRAME_BORDER_WIDTH_PX: f64 = 1.0;

/// Everything decided before the first pixel is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendPlan<'a> {
    /// Labeled entries, top row first (reverse registration order).
    pub draw_order: Vec<&'a LegendEntry>,
    pub metrics: RowMetrics,
    pub stub_width: f64,
    pub layout: LayoutResult,
}

impl LegendPlan<'_> {
    #[must_use]
    pub fn row_geometry(&self) -> RowGeometry {
        RowGeometry {
            padding: LEGEND_PADDING_PX,
            stub_width: self.stub_width,
            row_height: self.metrics.row_height(),
        }
    }
}

/// Draws a complete legend: shadow, frame and one row per labeled entry.
#[derive(Debug, Default)]
pub struct LegendRenderer {
    glyphs: GlyphRegistry,
}

impl LegendRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_glyphs(glyphs: GlyphRegistry) -> Self {
        Self { glyphs }
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphRegistry {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut GlyphRegistry {
        &mut self.glyphs
    }

    /// Computes the legend geometry without drawing.
    ///
    /// Returns `Ok(None)` when the anchor is `none`.
    pub fn plan<'a>(
        &self,
        surface: &dyn DrawingSurface,
        context: &LegendContext<'a>,
    ) -> LegendResult<Option<LegendPlan<'a>>> {
        let style = &context.style;
        if !style.anchor.is_enabled() {
            return Ok(None);
        }
        context.validate()?;

        let mut draw_order: Vec<&'a LegendEntry> = context
            .entries
            .iter()
            .filter(|entry| entry.label.is_some())
            .collect();
        draw_order.reverse();

        let metrics = measure_rows(context.entries, style.font, surface);
        let stub_width = style.stub_width_px();
        let size = frame_size(metrics, draw_order.len(), LEGEND_PADDING_PX, stub_width);
        let Some(layout) = compute_layout(
            style.anchor,
            context.plot_area,
            LEGEND_PADDING_PX,
            size,
            metrics.max_label_width,
            style.shadow,
        ) else {
            return Ok(None);
        };

        Ok(Some(LegendPlan {
            draw_order,
            metrics,
            stub_width,
            layout,
        }))
    }

    pub fn render(
        &self,
        surface: &mut dyn DrawingSurface,
        context: &LegendContext<'_>,
    ) -> LegendResult<()> {
        let Some(plan) = self.plan(surface, context)? else {
            trace!("legend disabled");
            return Ok(());
        };
        let style = &context.style;
        let frame = plan.layout.frame_rect();
        debug!(
            anchor = %style.anchor,
            shadow = %style.shadow,
            rows = plan.draw_order.len(),
            frame_x = frame.origin.x,
            frame_y = frame.origin.y,
            frame_width = frame.size.width,
            frame_height = frame.size.height,
            "render legend"
        );

        if let Some(shadow) = plan.layout.shadow_rect() {
            surface.fill_rect(shadow, style.shadow_color)?;
        }
        surface.fill_rect(frame, style.background_color)?;
        surface.stroke_rect(frame, Stroke::solid(style.frame_color, FRAME_BORDER_WIDTH_PX))?;

        let items = ItemRenderer::new(style, &self.glyphs);
        let geometry = plan.row_geometry();
        let row_count = plan.draw_order.len();
        for (row, entry) in plan.draw_order.iter().enumerate() {
            let origin = plan
                .layout
                .row_text_origin(row, row_count, geometry.row_height);
            trace!(row, label = entry.label().unwrap_or_default(), "draw legend row");
            items.draw_row(surface, entry, origin, geometry)?;
        }
        Ok(())
    }
}

/// Renders the legend described by `context` with the standard glyph set.
pub fn render_legend(
    surface: &mut dyn DrawingSurface,
    context: &LegendContext<'_>,
) -> LegendResult<()> {
    LegendRenderer::new().render(surface, context)
}
