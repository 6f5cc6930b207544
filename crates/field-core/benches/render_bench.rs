use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field_core::{FieldChart, PlotInputs, RenderOptions, Session};

fn build_chart(points: usize) -> FieldChart {
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 800;
    opts.draw_labels = false;
    let mut chart = FieldChart::new(opts);
    let inputs = PlotInputs { grid_points: points.to_string(), ..PlotInputs::with_charges("0 0 1\n1 0 -1\n-3 4 2") };
    Session::default().submit(&inputs, &mut chart).expect("plot");
    chart
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 200usize] {
        group.bench_function(format!("field_{n}"), |b| {
            let chart = build_chart(n);
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
