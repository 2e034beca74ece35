use std::f64::consts::PI;
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{LegendError, LegendResult};
use crate::render::{Color, DrawingSurface, FontSpec, Point, Rect, Size, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub shapes_filled: usize,
    pub shapes_stroked: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws either into its own offscreen image surface (`CairoSurface::new`) or
/// onto an external context such as a GTK `DrawingArea` callback
/// (`CairoSurface::for_context`).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> LegendResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(LegendError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn for_context(context: &Context) -> Self {
        Self {
            context: context.clone(),
            image: None,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Paints the whole target with `color`.
    pub fn clear(&mut self, color: Color) -> LegendResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    /// Encodes the offscreen image as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> LegendResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            LegendError::InvalidData("external cairo contexts cannot be exported".to_owned())
        })?;
        image.flush();
        image
            .write_to_png(writer)
            .map_err(|err| LegendError::InvalidData(format!("failed to write png: {err}")))
    }

    fn text_layout(&self, text: &str, font: FontSpec) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let description =
            FontDescription::from_string(&format!("{} {}", font.family.family_name(), font.size_pt));
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        layout
    }

    fn stroke_path(&mut self, stroke: Stroke, what: &str) -> LegendResult<()> {
        stroke.validate()?;
        apply_stroke(&self.context, stroke);
        let result = self
            .context
            .stroke()
            .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err));
        self.context.set_dash(&[], 0.0);
        result?;
        self.stats.shapes_stroked += 1;
        Ok(())
    }

    fn fill_path(&mut self, color: Color, what: &str) -> LegendResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))?;
        self.stats.shapes_filled += 1;
        Ok(())
    }
}

impl DrawingSurface for CairoSurface {
    fn measure_text(&self, text: &str, font: FontSpec) -> Size {
        let (width, height) = self.text_layout(text, font).pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> LegendResult<()> {
        rect.validate()?;
        append_rect_path(&self.context, rect);
        self.fill_path(color, "rectangle")
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> LegendResult<()> {
        rect.validate()?;
        append_rect_path(&self.context, rect);
        self.stroke_path(stroke, "rectangle")
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) -> LegendResult<()> {
        bounds.validate()?;
        append_ellipse_path(&self.context, bounds)?;
        self.fill_path(color, "ellipse")
    }

    fn stroke_ellipse(&mut self, bounds: Rect, stroke: Stroke) -> LegendResult<()> {
        bounds.validate()?;
        append_ellipse_path(&self.context, bounds)?;
        self.stroke_path(stroke, "ellipse")
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> LegendResult<()> {
        append_polygon_path(&self.context, points)?;
        self.fill_path(color, "polygon")
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) -> LegendResult<()> {
        append_polygon_path(&self.context, points)?;
        self.stroke_path(stroke, "polygon")
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> LegendResult<()> {
        stroke.validate()?;
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        apply_stroke(&self.context, stroke);
        let result = self
            .context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err));
        self.context.set_dash(&[], 0.0);
        result?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> LegendResult<()> {
        font.validate()?;
        color.validate()?;
        let layout = self.text_layout(text, font);
        apply_color(&self.context, color);
        self.context.move_to(origin.x, origin.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, stroke: Stroke) {
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context.set_dash(&stroke.style.dash_pattern(stroke.width), 0.0);
}

fn append_rect_path(context: &Context, rect: Rect) {
    context.new_path();
    context.rectangle(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
}

fn append_ellipse_path(context: &Context, bounds: Rect) -> LegendResult<()> {
    context.new_path();
    if bounds.size.width <= 0.0 || bounds.size.height <= 0.0 {
        return Ok(());
    }
    let center = bounds.center();
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(center.x, center.y);
    context.scale(bounds.size.width * 0.5, bounds.size.height * 0.5);
    context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn append_polygon_path(context: &Context, points: &[Point]) -> LegendResult<()> {
    let Some((first, rest)) = points.split_first() else {
        return Err(LegendError::InvalidData(
            "polygon needs at least one point".to_owned(),
        ));
    };
    if points.iter().any(|point| !point.is_finite()) {
        return Err(LegendError::InvalidData(
            "polygon coordinates must be finite".to_owned(),
        ));
    }
    context.new_path();
    context.move_to(first.x, first.y);
    for point in rest {
        context.line_to(point.x, point.y);
    }
    context.close_path();
    Ok(())
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> LegendError {
    LegendError::InvalidData(format!("{prefix}: {err}"))
}
