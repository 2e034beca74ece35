use crate::core::Viewport;
use crate::error::{LegendError, LegendResult};
use crate::render::{Color, FontFamily, FontSpec};

use super::{AnchorLocation, LegendEntry, ShadowDirection};

/// Gap between the frame, the plot edge and the row contents.
pub const LEGEND_PADDING_PX: f64 = 3.0;

/// Connector length per full 12 pt of legend font size.
pub const STUB_WIDTH_PER_12PT_PX: f64 = 40.0;

/// Visual settings for one legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendStyle {
    pub anchor: AnchorLocation,
    pub shadow: ShadowDirection,
    pub font: FontSpec,
    pub text_color: Color,
    pub background_color: Color,
    pub frame_color: Color,
    pub shadow_color: Color,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            anchor: AnchorLocation::None,
            shadow: ShadowDirection::LowerRight,
            font: FontSpec::new(FontFamily::SansSerif, 12.0),
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            frame_color: Color::BLACK,
            shadow_color: Color::from_rgba8(0, 0, 0, 50),
        }
    }
}

impl LegendStyle {
    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorLocation) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowDirection) -> Self {
        self.shadow = shadow;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size_pt: f64) -> Self {
        self.font.size_pt = size_pt;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    #[must_use]
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    /// Length of the connector swatch: 40 px per whole 12 pt of font size.
    #[must_use]
    pub fn stub_width_px(&self) -> f64 {
        STUB_WIDTH_PER_12PT_PX * (self.font.size_pt / 12.0).floor()
    }

    pub fn validate(&self) -> LegendResult<()> {
        self.font.validate()?;
        for (name, color) in [
            ("text_color", self.text_color),
            ("background_color", self.background_color),
            ("frame_color", self.frame_color),
            ("shadow_color", self.shadow_color),
        ] {
            color.validate().map_err(|err| {
                LegendError::InvalidData(format!("legend style `{name}`: {err}"))
            })?;
        }
        Ok(())
    }
}

/// Snapshot of everything one legend draw pass reads.
#[derive(Debug, Clone, Copy)]
pub struct LegendContext<'a> {
    pub plot_area: Viewport,
    pub style: LegendStyle,
    pub entries: &'a [LegendEntry],
}

impl<'a> LegendContext<'a> {
    #[must_use]
    pub fn new(plot_area: Viewport, style: LegendStyle, entries: &'a [LegendEntry]) -> Self {
        Self {
            plot_area,
            style,
            entries,
        }
    }

    pub fn validate(&self) -> LegendResult<()> {
        if !self.plot_area.is_valid() {
            return Err(LegendError::InvalidData(format!(
                "invalid plot area size: width={}, height={}",
                self.plot_area.width, self.plot_area.height
            )));
        }
        self.style.validate()?;
        for entry in self.entries.iter().filter(|entry| entry.label.is_some()) {
            entry.color.validate()?;
        }
        Ok(())
    }
}
