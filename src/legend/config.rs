use serde::{Deserialize, Serialize};

use crate::error::{LegendError, LegendResult};
use crate::render::{Color, FontFamily, FontSpec};

use super::{AnchorLocation, LegendStyle, ShadowDirection};

pub const LEGEND_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable legend settings as a host application stores them.
///
/// Location and shadow are kept as names so unknown values can be reported
/// (location) or normalized (shadow) when the config is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendConfig {
    pub location: String,
    pub shadow_direction: String,
    pub font_family: FontFamily,
    pub font_size_pt: f64,
    pub text_color: Color,
    pub background_color: Color,
    pub frame_color: Color,
    pub shadow_color: Color,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self::from_style(&LegendStyle::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegendConfigJsonContractV1 {
    schema_version: u32,
    legend: LegendConfig,
}

impl LegendConfig {
    #[must_use]
    pub fn from_style(style: &LegendStyle) -> Self {
        Self {
            location: style.anchor.as_str().to_owned(),
            shadow_direction: style.shadow.as_str().to_owned(),
            font_family: style.font.family,
            font_size_pt: style.font.size_pt,
            text_color: style.text_color,
            background_color: style.background_color,
            frame_color: style.frame_color,
            shadow_color: style.shadow_color,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_shadow_direction(mut self, direction: impl Into<String>) -> Self {
        self.shadow_direction = direction.into();
        self
    }

    /// Turns stored names into a typed style.
    ///
    /// An unknown location is a configuration error; an unknown shadow
    /// direction silently disables the shadow.
    pub fn resolve(&self) -> LegendResult<LegendStyle> {
        let anchor = self.location.parse::<AnchorLocation>()?;
        let shadow = ShadowDirection::from_name_lenient(&self.shadow_direction);
        let style = LegendStyle {
            anchor,
            shadow,
            font: FontSpec::new(self.font_family, self.font_size_pt),
            text_color: self.text_color,
            background_color: self.background_color,
            frame_color: self.frame_color,
            shadow_color: self.shadow_color,
        };
        style.validate()?;
        Ok(style)
    }

    /// Accepts either a bare config object or the versioned envelope.
    ///
    /// A payload carrying `schema_version` is always read as the envelope, so a
    /// broken envelope is reported instead of being read as a bare config.
    pub fn from_json_str(input: &str) -> LegendResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            LegendError::InvalidData(format!("failed to parse legend config json: {e}"))
        })?;
        let is_envelope = value
            .as_object()
            .is_some_and(|object| object.contains_key("schema_version"));

        if is_envelope {
            let payload: LegendConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    LegendError::InvalidData(format!(
                        "failed to parse legend config contract v1: {e}"
                    ))
                })?;
            if payload.schema_version != LEGEND_CONFIG_JSON_SCHEMA_V1 {
                return Err(LegendError::InvalidData(format!(
                    "unsupported legend config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.legend);
        }
        serde_json::from_value::<Self>(value).map_err(|e| {
            LegendError::InvalidData(format!("failed to parse legend config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> LegendResult<String> {
        let payload = LegendConfigJsonContractV1 {
            schema_version: LEGEND_CONFIG_JSON_SCHEMA_V1,
            legend: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            LegendError::InvalidData(format!("failed to serialize legend config contract v1: {e}"))
        })
    }
}
