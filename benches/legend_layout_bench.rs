use chart_legend::core::Viewport;
use chart_legend::legend::{
    AnchorLocation, LEGEND_PADDING_PX, LegendContext, LegendEntry, LegendStyle, MarkerGlyphKind,
    RowMetrics, ShadowDirection, compute_layout, frame_size, render_legend,
};
use chart_legend::render::{Color, LineStrokeStyle, RecordingSurface};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compute_layout_all_anchors(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let metrics = RowMetrics {
        max_label_width: 120.0,
        max_label_height: 16.0,
    };
    let size = frame_size(metrics, 12, LEGEND_PADDING_PX, 40.0);

    c.bench_function("legend_compute_layout_all_anchors", |b| {
        b.iter(|| {
            for anchor in AnchorLocation::ALL {
                let _ = compute_layout(
                    black_box(anchor),
                    black_box(viewport),
                    LEGEND_PADDING_PX,
                    black_box(size),
                    black_box(metrics.max_label_width),
                    ShadowDirection::LowerRight,
                );
            }
        })
    });
}

fn bench_render_legend_64_entries(c: &mut Criterion) {
    let entries: Vec<LegendEntry> = (0..64)
        .map(|i| {
            let marker = MarkerGlyphKind::DRAWABLE[i % MarkerGlyphKind::DRAWABLE.len()];
            let entry = LegendEntry::labeled(format!("series {i}"), Color::rgb(0.2, 0.4, 0.6))
                .with_marker(marker)
                .with_line_style(LineStrokeStyle::DashDot);
            if i % 5 == 0 {
                entry.as_band_series()
            } else {
                entry
            }
        })
        .collect();
    let style = LegendStyle::default().with_anchor(AnchorLocation::UpperRight);
    let context = LegendContext::new(Viewport::new(1600, 900), style, &entries);

    c.bench_function("legend_render_64_entries_recording", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new(Viewport::new(1600, 900));
            render_legend(&mut surface, black_box(&context)).expect("render");
            black_box(surface.draw_call_count())
        })
    });
}

criterion_group!(
    benches,
    bench_compute_layout_all_anchors,
    bench_render_legend_64_entries
);
criterion_main!(benches);
