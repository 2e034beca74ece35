use chart_legend::LegendError;
use chart_legend::legend::{
    AnchorLocation, LEGEND_CONFIG_JSON_SCHEMA_V1, LegendConfig, LegendStyle, ShadowDirection,
};
use chart_legend::render::{Color, FontFamily};

#[test]
fn bare_config_accepts_camel_case_names_and_defaults_the_rest() {
    let config = LegendConfig::from_json_str(
        r#"{ "location": "lowerRight", "shadow_direction": "upperLeft", "font_size_pt": 14.0 }"#,
    )
    .expect("parse bare config");
    let style = config.resolve().expect("resolve");

    assert_eq!(style.anchor, AnchorLocation::LowerRight);
    assert_eq!(style.shadow, ShadowDirection::UpperLeft);
    assert_eq!(style.font.size_pt, 14.0);
    assert_eq!(style.font.family, FontFamily::SansSerif);
    assert_eq!(style.background_color, Color::WHITE);
    assert_eq!(style.shadow_color, Color::from_rgba8(0, 0, 0, 50));
}

#[test]
fn default_config_resolves_to_default_style() {
    let style = LegendConfig::default().resolve().expect("resolve");
    assert_eq!(style, LegendStyle::default());
}

#[test]
fn contract_v1_round_trips() {
    let config = LegendConfig::from_style(
        &LegendStyle::default()
            .with_anchor(AnchorLocation::MiddleLeft)
            .with_shadow(ShadowDirection::None)
            .with_frame_color(Color::rgb(0.2, 0.3, 0.4)),
    );
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"middle_left\""));

    let parsed = LegendConfig::from_json_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
    assert_eq!(LEGEND_CONFIG_JSON_SCHEMA_V1, 1);
}

#[test]
fn unknown_shadow_direction_disables_shadow() {
    let style = LegendConfig::default()
        .with_location("upper_left")
        .with_shadow_direction("sideways")
        .resolve()
        .expect("lenient shadow");
    assert_eq!(style.shadow, ShadowDirection::None);
    assert_eq!(ShadowDirection::from_code_lenient(17), ShadowDirection::None);
    assert_eq!(ShadowDirection::from_code_lenient(4), ShadowDirection::LowerRight);
}

#[test]
fn unknown_location_is_a_configuration_error() {
    let err = LegendConfig::default()
        .with_location("center")
        .resolve()
        .expect_err("unknown location");
    assert!(matches!(err, LegendError::Configuration(_)));
    assert!(err.to_string().contains("center"));

    assert!(matches!(
        AnchorLocation::try_from(9),
        Err(LegendError::Configuration(_))
    ));
    assert!(matches!(
        AnchorLocation::try_from(-1),
        Err(LegendError::Configuration(_))
    ));
    assert_eq!(
        AnchorLocation::try_from(7).expect("lower right"),
        AnchorLocation::LowerRight
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = LegendConfig::from_json_str(r#"{ "schema_version": 2, "legend": {} }"#)
        .expect_err("v2 is unknown");
    assert!(matches!(err, LegendError::InvalidData(_)));
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = LegendConfig::from_json_str("{ \"location\": ").expect_err("truncated");
    assert!(matches!(err, LegendError::InvalidData(_)));
}

#[test]
fn invalid_font_size_fails_resolution() {
    let mut config = LegendConfig::default().with_location("upper_right");
    config.font_size_pt = 0.0;
    assert!(matches!(
        config.resolve(),
        Err(LegendError::InvalidData(_))
    ));
}

#[test]
fn malformed_envelope_is_reported_not_defaulted() {
    let err = LegendConfig::from_json_str(
        r#"{ "schema_version": 1, "legend": { "location": "lower_right", "font_size_pt": "big" } }"#,
    )
    .expect_err("font size must be a number");
    assert!(matches!(err, LegendError::InvalidData(_)));
    assert!(err.to_string().contains("contract v1"));

    let err = LegendConfig::from_json_str(r#"{ "schema_version": 1 }"#)
        .expect_err("envelope without legend");
    assert!(matches!(err, LegendError::InvalidData(_)));
}

#[test]
fn misspelled_keys_are_rejected() {
    let err = LegendConfig::from_json_str(r#"{ "locaton": "lower_right" }"#)
        .expect_err("unknown key");
    assert!(matches!(err, LegendError::InvalidData(_)));
    assert!(err.to_string().contains("locaton"));

    let err = LegendConfig::from_json_str(
        r#"{ "schema_version": 1, "legend": { "shadow": "upper_left" } }"#,
    )
    .expect_err("unknown key inside envelope");
    assert!(matches!(err, LegendError::InvalidData(_)));
}

#[test]
fn default_config_round_trips_bit_exact() {
    let config = LegendConfig::default();
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let parsed = LegendConfig::from_json_str(&json).expect("parse");
    assert_eq!(
        parsed.shadow_color.alpha.to_bits(),
        Color::from_rgba8(0, 0, 0, 50).alpha.to_bits()
    );
    assert_eq!(parsed, config);
}
