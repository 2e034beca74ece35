use chart_legend::core::Viewport;
use chart_legend::legend::{
    AnchorLocation, LEGEND_PADDING_PX, LegendContext, LegendEntry, LegendStyle, MarkerGlyphKind,
    RowMetrics, ShadowDirection, compute_layout, frame_size, render_legend,
};
use chart_legend::render::{Color, FontFamily, RecordingSurface};
use proptest::prelude::*;

fn anchor_strategy() -> impl Strategy<Value = AnchorLocation> {
    prop::sample::select(AnchorLocation::ALL.to_vec())
}

fn shadow_strategy() -> impl Strategy<Value = ShadowDirection> {
    prop::sample::select(ShadowDirection::ALL.to_vec())
}

fn marker_strategy() -> impl Strategy<Value = MarkerGlyphKind> {
    let mut kinds = MarkerGlyphKind::DRAWABLE.to_vec();
    kinds.push(MarkerGlyphKind::None);
    prop::sample::select(kinds)
}

fn entry_strategy() -> impl Strategy<Value = LegendEntry> {
    (
        prop::option::of("[A-Za-z ]{1,16}"),
        marker_strategy(),
        any::<bool>(),
    )
        .prop_map(|(label, marker, band)| {
            let mut entry = LegendEntry::new(Color::rgb(0.1, 0.4, 0.8)).with_marker(marker);
            entry.label = label;
            entry.is_band_series = band;
            entry
        })
}

proptest! {
    #[test]
    fn frame_geometry_follows_metrics(
        whole_width in 0u32..400,
        fraction in 0.0f64..0.9,
        height in 0.0f64..40.0,
        rows in 0usize..20,
        stub in prop::sample::select(vec![0.0, 40.0, 80.0, 120.0]),
    ) {
        let width = f64::from(whole_width) + fraction;
        let metrics = RowMetrics { max_label_width: width, max_label_height: height };
        let size = frame_size(metrics, rows, LEGEND_PADDING_PX, stub);

        prop_assert_eq!(size.width, 9.0 + f64::from(whole_width) + stub);
        prop_assert_eq!(size.height, (6.0 + height * rows as f64).trunc());
    }

    #[test]
    fn anchored_frames_sit_at_whole_pixels_with_shadow_offset(
        anchor in anchor_strategy(),
        shadow in shadow_strategy(),
        plot_width in 120u32..2400,
        plot_height in 80u32..1600,
        label_width in 0.0f64..100.0,
        rows in 0usize..8,
    ) {
        let metrics = RowMetrics { max_label_width: label_width, max_label_height: 16.0 };
        let size = frame_size(metrics, rows, LEGEND_PADDING_PX, 40.0);
        let layout = compute_layout(
            anchor,
            Viewport::new(plot_width, plot_height),
            LEGEND_PADDING_PX,
            size,
            label_width,
            shadow,
        );

        if !anchor.is_enabled() {
            prop_assert!(layout.is_none());
            return Ok(());
        }
        let layout = layout.expect("enabled anchor");
        prop_assert_eq!(layout.frame_size, size);
        prop_assert_eq!(layout.frame_origin.x.fract(), 0.0);
        prop_assert_eq!(layout.frame_origin.y.fract(), 0.0);
        prop_assert_eq!(layout.text_origin.y.fract(), 0.0);

        match anchor {
            AnchorLocation::UpperLeft | AnchorLocation::MiddleLeft | AnchorLocation::LowerLeft => {
                prop_assert_eq!(layout.frame_origin.x, LEGEND_PADDING_PX);
            }
            AnchorLocation::UpperRight | AnchorLocation::MiddleRight | AnchorLocation::LowerRight => {
                prop_assert_eq!(
                    layout.frame_origin.x + size.width + LEGEND_PADDING_PX,
                    f64::from(plot_width)
                );
            }
            _ => {}
        }
        if matches!(
            anchor,
            AnchorLocation::UpperLeft | AnchorLocation::UpperRight | AnchorLocation::UpperCenter
        ) {
            prop_assert_eq!(layout.frame_origin.y, LEGEND_PADDING_PX);
        }

        match (shadow.offset(), layout.shadow_origin) {
            (None, None) => {}
            (Some((dx, dy)), Some(origin)) => {
                prop_assert_eq!(origin.x - layout.frame_origin.x, dx);
                prop_assert_eq!(origin.y - layout.frame_origin.y, dy);
                prop_assert_eq!(dx.abs(), 2.0);
                prop_assert_eq!(dy.abs(), 2.0);
            }
            (expected, actual) => {
                prop_assert!(false, "shadow mismatch: {:?} vs {:?}", expected, actual);
            }
        }
    }

    #[test]
    fn rendered_legend_has_one_label_per_labeled_entry(
        anchor in anchor_strategy(),
        shadow in shadow_strategy(),
        entries in prop::collection::vec(entry_strategy(), 0..12),
    ) {
        let style = LegendStyle::default().with_anchor(anchor).with_shadow(shadow);
        let context = LegendContext::new(Viewport::new(640, 480), style, &entries);
        let mut first = RecordingSurface::new(Viewport::new(640, 480));
        let mut second = RecordingSurface::new(Viewport::new(640, 480));

        render_legend(&mut first, &context).expect("first render");
        render_legend(&mut second, &context).expect("second render");
        prop_assert_eq!(first.frame(), second.frame());

        if !anchor.is_enabled() {
            prop_assert_eq!(first.draw_call_count(), 0);
            prop_assert_eq!(first.measure_call_count(), 0);
            return Ok(());
        }

        let labeled: Vec<&LegendEntry> = entries.iter().filter(|e| e.label.is_some()).collect();
        let labels: Vec<&str> = first
            .frame()
            .texts()
            .filter(|text| text.font.family == FontFamily::SansSerif)
            .map(|text| text.text.as_str())
            .collect();
        let expected: Vec<&str> = labeled.iter().rev().filter_map(|e| e.label()).collect();
        prop_assert_eq!(labels, expected);

        let markers = labeled
            .iter()
            .filter(|entry| entry.marker != MarkerGlyphKind::None)
            .count();
        let shadow_calls = usize::from(shadow != ShadowDirection::None);
        prop_assert_eq!(
            first.draw_call_count(),
            shadow_calls + 2 + labeled.len() * 2 + markers
        );
        prop_assert_eq!(first.measure_call_count(), labeled.len());
        first.frame().validate().expect("valid frame");
    }
}
