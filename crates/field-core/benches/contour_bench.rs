use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field_core::{contour_lines, sample, trace_streamlines, ChargeSet, ContourPlan, GridSpec, PointCharge, StreamlineConfig};

fn dipole(points: usize) -> field_core::SampledField {
    let set = ChargeSet::try_new(vec![PointCharge::new(0.0, 0.0, 1.0), PointCharge::new(1.0, 0.0, -1.0)]).expect("charges");
    sample(&set, &GridSpec::try_new(-10.0, 10.0, points).expect("grid"))
}

fn bench_contours(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour_lines");
    for &n in &[200usize, 400usize] {
        let f = dipole(n);
        let plan = ContourPlan::plan(&f.v, 20);
        group.bench_function(format!("levels20_n{n}"), |b| {
            b.iter(|| black_box(contour_lines(&f.x, &f.y, &f.v, &plan.levels)));
        });
    }
    group.finish();
}

fn bench_streamlines(c: &mut Criterion) {
    let f = dipole(200);
    let cfg = StreamlineConfig::default();
    c.bench_function("trace_streamlines_n200", |b| {
        b.iter(|| black_box(trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &cfg)));
    });
}

criterion_group!(benches, bench_contours, bench_streamlines);
criterion_main!(benches);
