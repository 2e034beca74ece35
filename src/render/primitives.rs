use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{LegendError, LegendResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    pub fn validate(self) -> LegendResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LegendError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Pixel-space point on the plot surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with its top-left corner at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.origin
            .offset(self.size.width * 0.5, self.size.height * 0.5)
    }

    pub fn validate(self) -> LegendResult<()> {
        if !self.origin.is_finite() {
            return Err(LegendError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.size.width.is_finite()
            || !self.size.height.is_finite()
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(LegendError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Dash style applied to stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dash,
    DashDot,
    DashDotDot,
    Dot,
}

impl LineStrokeStyle {
    /// On/off dash lengths in pixels, scaled by stroke width.
    ///
    /// Solid lines return an empty pattern.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> SmallVec<[f64; 6]> {
        let unit = stroke_width.max(1.0);
        let lengths: &[f64] = match self {
            Self::Solid => &[],
            Self::Dash => &[3.0, 1.0],
            Self::DashDot => &[3.0, 1.0, 1.0, 1.0],
            Self::DashDotDot => &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            Self::Dot => &[1.0, 1.0],
        };
        lengths.iter().map(|length| length * unit).collect()
    }
}

/// Pen used for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: LineStrokeStyle,
}

impl Stroke {
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> LegendResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LegendError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Monospace,
}

impl FontFamily {
    /// Family name understood by Pango and most font matchers.
    #[must_use]
    pub fn family_name(self) -> &'static str {
        match self {
            Self::SansSerif => "Sans",
            Self::Monospace => "Monospace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size_pt: f64,
}

impl FontSpec {
    #[must_use]
    pub const fn new(family: FontFamily, size_pt: f64) -> Self {
        Self { family, size_pt }
    }

    /// Same point size, fixed-width family.
    #[must_use]
    pub const fn monospace(self) -> Self {
        Self::new(FontFamily::Monospace, self.size_pt)
    }

    pub fn validate(self) -> LegendResult<()> {
        if !self.size_pt.is_finite() || self.size_pt <= 0.0 {
            return Err(LegendError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one label in pixel space, anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub origin: Point,
    pub font: FontSpec,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, origin: Point, font: FontSpec, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            font,
            color,
        }
    }

    pub fn validate(&self) -> LegendResult<()> {
        if !self.origin.is_finite() {
            return Err(LegendError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LineStrokeStyle, Point, Rect, Size};

    #[test]
    fn dash_patterns_scale_with_stroke_width() {
        assert!(LineStrokeStyle::Solid.dash_pattern(10.0).is_empty());
        assert_eq!(LineStrokeStyle::Dot.dash_pattern(1.0).as_slice(), &[1.0, 1.0]);
        assert_eq!(LineStrokeStyle::Dash.dash_pattern(2.0).as_slice(), &[6.0, 2.0]);
        assert_eq!(LineStrokeStyle::DashDotDot.dash_pattern(1.0).len(), 6);
    }

    #[test]
    fn rect_center_is_midpoint() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(6.0, 6.0));
        assert_eq!(rect.center(), Point::new(13.0, 23.0));
    }

    #[test]
    fn color_validation_rejects_out_of_range_channel() {
        assert!(Color::rgba(0.0, 0.0, 1.5, 1.0).validate().is_err());
        assert!(Color::from_rgba8(50, 0, 0, 255).validate().is_ok());
    }
}
