use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LegendError, LegendResult};
use crate::render::{Color, LineStrokeStyle};

/// Where the legend frame sits over the plot area.
///
/// `None` disables the legend: rendering performs no surface calls at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorLocation {
    #[default]
    None,
    UpperLeft,
    UpperRight,
    UpperCenter,
    MiddleLeft,
    MiddleRight,
    LowerLeft,
    LowerRight,
    LowerCenter,
}

impl AnchorLocation {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::UpperLeft,
        Self::UpperRight,
        Self::UpperCenter,
        Self::MiddleLeft,
        Self::MiddleRight,
        Self::LowerLeft,
        Self::LowerRight,
        Self::LowerCenter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UpperLeft => "upper_left",
            Self::UpperRight => "upper_right",
            Self::UpperCenter => "upper_center",
            Self::MiddleLeft => "middle_left",
            Self::MiddleRight => "middle_right",
            Self::LowerLeft => "lower_left",
            Self::LowerRight => "lower_right",
            Self::LowerCenter => "lower_center",
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for AnchorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorLocation {
    type Err = LegendError;

    /// Accepts snake_case (`lower_right`) and camelCase (`lowerRight`) names.
    fn from_str(input: &str) -> LegendResult<Self> {
        let normalized = normalize_name(input);
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.as_str().replace('_', "") == normalized)
            .ok_or_else(|| {
                LegendError::Configuration(format!("unsupported anchor location: `{input}`"))
            })
    }
}

impl TryFrom<i32> for AnchorLocation {
    type Error = LegendError;

    /// Numeric codes follow declaration order, `0 = none` through `8 = lower_center`.
    fn try_from(code: i32) -> LegendResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| {
                LegendError::Configuration(format!("unsupported anchor location: code {code}"))
            })
    }
}

/// Diagonal the drop shadow is offset towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowDirection {
    #[default]
    None,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl ShadowDirection {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// Shadow displacement from the frame origin, in pixels.
    pub const OFFSET_PX: f64 = 2.0;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UpperLeft => "upper_left",
            Self::UpperRight => "upper_right",
            Self::LowerLeft => "lower_left",
            Self::LowerRight => "lower_right",
        }
    }

    /// Parses a direction name; anything unrecognized becomes `None`.
    #[must_use]
    pub fn from_name_lenient(input: &str) -> Self {
        let normalized = normalize_name(input);
        match Self::ALL
            .into_iter()
            .find(|direction| direction.as_str().replace('_', "") == normalized)
        {
            Some(direction) => direction,
            None => {
                debug!(input, "unknown shadow direction, disabling shadow");
                Self::None
            }
        }
    }

    /// Maps a numeric code (`0 = none` .. `4 = lower_right`); out-of-range codes become `None`.
    #[must_use]
    pub fn from_code_lenient(code: i32) -> Self {
        match usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
        {
            Some(direction) => direction,
            None => {
                debug!(code, "unknown shadow direction code, disabling shadow");
                Self::None
            }
        }
    }

    /// Signed `(dx, dy)` applied to the frame origin, or `None` when no shadow is drawn.
    #[must_use]
    pub fn offset(self) -> Option<(f64, f64)> {
        let step = Self::OFFSET_PX;
        match self {
            Self::None => None,
            Self::UpperLeft => Some((-step, -step)),
            Self::UpperRight => Some((step, -step)),
            Self::LowerLeft => Some((-step, step)),
            Self::LowerRight => Some((step, step)),
        }
    }
}

impl fmt::Display for ShadowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-marker style drawn next to each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerGlyphKind {
    #[default]
    None,
    Asterisk,
    Cross,
    Eks,
    HashTag,
    VerticalBar,
    FilledCircle,
    OpenCircle,
    FilledSquare,
    OpenSquare,
    FilledDiamond,
    OpenDiamond,
    TriUp,
    TriDown,
}

impl MarkerGlyphKind {
    /// Every kind that produces visible geometry.
    pub const DRAWABLE: [Self; 13] = [
        Self::Asterisk,
        Self::Cross,
        Self::Eks,
        Self::HashTag,
        Self::VerticalBar,
        Self::FilledCircle,
        Self::OpenCircle,
        Self::FilledSquare,
        Self::OpenSquare,
        Self::FilledDiamond,
        Self::OpenDiamond,
        Self::TriUp,
        Self::TriDown,
    ];
}

/// Read-only view of one chart series as the legend sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Series without a label are left out of the legend.
    pub label: Option<String>,
    pub color: Color,
    #[serde(default)]
    pub line_style: Option<LineStrokeStyle>,
    #[serde(default)]
    pub marker: MarkerGlyphKind,
    /// Filled-region series get a wide connector swatch.
    #[serde(default)]
    pub is_band_series: bool,
}

impl LegendEntry {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            label: None,
            color,
            line_style: None,
            marker: MarkerGlyphKind::None,
            is_band_series: false,
        }
    }

    #[must_use]
    pub fn labeled(label: impl Into<String>, color: Color) -> Self {
        Self::new(color).with_label(label)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: LineStrokeStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerGlyphKind) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn as_band_series(mut self) -> Self {
        self.is_band_series = true;
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

fn normalize_name(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{AnchorLocation, ShadowDirection};
    use crate::error::LegendError;

    #[test]
    fn anchor_names_accept_both_spellings() {
        assert_eq!(
            "lowerRight".parse::<AnchorLocation>().expect("camel"),
            AnchorLocation::LowerRight
        );
        assert_eq!(
            "upper_center".parse::<AnchorLocation>().expect("snake"),
            AnchorLocation::UpperCenter
        );
        assert_eq!(
            "none".parse::<AnchorLocation>().expect("none"),
            AnchorLocation::None
        );
    }

    #[test]
    fn unknown_anchor_is_configuration_error() {
        let err = "center".parse::<AnchorLocation>().expect_err("unsupported");
        assert!(matches!(err, LegendError::Configuration(_)));
        let err = AnchorLocation::try_from(9).expect_err("out of range");
        assert!(matches!(err, LegendError::Configuration(_)));
        assert!(AnchorLocation::try_from(-1).is_err());
        assert_eq!(AnchorLocation::try_from(7).expect("code"), AnchorLocation::LowerRight);
    }

    #[test]
    fn unknown_shadow_normalizes_to_none() {
        assert_eq!(ShadowDirection::from_name_lenient("sideways"), ShadowDirection::None);
        assert_eq!(ShadowDirection::from_code_lenient(42), ShadowDirection::None);
        assert_eq!(
            ShadowDirection::from_name_lenient("lowerLeft"),
            ShadowDirection::LowerLeft
        );
        assert_eq!(ShadowDirection::from_code_lenient(2), ShadowDirection::UpperRight);
    }
}
