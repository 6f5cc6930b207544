// File: crates/field-core/tests/streamline.rs
// Purpose: Field-line tracing follows E, stays inside the grid and respects the mask.

use field_core::{sample, trace_streamlines, ChargeSet, GridSpec, PointCharge, StreamlineConfig};

fn field_of(list: &[(f64, f64, f64)], points: usize) -> field_core::SampledField {
    let charges = ChargeSet::try_new(list.iter().map(|&(x, y, q)| PointCharge::new(x, y, q)).collect()).expect("charges");
    sample(&charges, &GridSpec::try_new(-10.0, 10.0, points).expect("grid"))
}

#[test]
fn lines_stay_inside_the_grid() {
    let f = field_of(&[(0.0, 0.0, 1.0), (1.0, 0.0, -1.0)], 120);
    let lines = trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &StreamlineConfig::default());
    assert!(!lines.is_empty());
    for line in &lines {
        assert!(line.points.len() >= StreamlineConfig::default().min_points);
        for &(x, y) in &line.points {
            assert!((-10.0..=10.0).contains(&x) && (-10.0..=10.0).contains(&y), "({x}, {y}) outside");
        }
    }
}

#[test]
fn lines_follow_the_field_direction() {
    let f = field_of(&[(0.0, 0.0, 1.0)], 100);
    let lines = trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &StreamlineConfig::default());
    for line in &lines {
        let ((ax, ay), (dx, dy)) = match line.arrow() {
            Some(a) => a,
            None => continue,
        };
        // single positive charge: direction is radially outward
        let r = (ax * ax + ay * ay).sqrt();
        if r < 1.0 {
            continue;
        }
        let radial = (dx * ax + dy * ay) / r;
        assert!(radial > 0.9, "arrow at ({ax:.2}, {ay:.2}) not outward: {radial}");
    }
}

#[test]
fn density_controls_line_count() {
    let f = field_of(&[(-3.0, 0.0, 1.0), (3.0, 0.0, -1.0)], 100);
    let sparse = StreamlineConfig { density: 0.5, ..StreamlineConfig::default() };
    let dense = StreamlineConfig { density: 2.0, ..StreamlineConfig::default() };
    let a = trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &sparse).len();
    let b = trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &dense).len();
    assert!(b > a, "dense {b} <= sparse {a}");
}

#[test]
fn vanishing_field_gives_no_lines() {
    let f = field_of(&[(0.0, 0.0, 0.0)], 40);
    assert!(trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &StreamlineConfig::default()).is_empty());
}

#[test]
fn tracing_is_deterministic() {
    let f = field_of(&[(2.0, 1.0, 2.0), (-1.0, -3.0, -1.0)], 80);
    let cfg = StreamlineConfig::default();
    assert_eq!(trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &cfg), trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &cfg));
}

#[test]
fn lines_agree_with_interpolated_field() {
    let charges = [(-3.0, 0.0, 1.0), (3.0, 0.0, -1.0)];
    let f = field_of(&charges, 100);
    let lines = trace_streamlines(&f.x, &f.y, &f.ex, &f.ey, &StreamlineConfig::default());
    assert!(!lines.is_empty());
    let mut checked = 0;
    for line in &lines {
        for w in line.points.windows(2) {
            let ((ax, ay), (bx, by)) = (w[0], w[1]);
            if charges.iter().any(|&(cx, cy, _)| (ax - cx).hypot(ay - cy) < 1.5) {
                continue;
            }
            let (ex, ey) = f.field_at(ax, ay).expect("line point inside the grid");
            let (sx, sy) = (bx - ax, by - ay);
            let cos = (ex * sx + ey * sy) / (ex.hypot(ey) * sx.hypot(sy));
            assert!(cos > 0.9, "step at ({ax:.2}, {ay:.2}) leaves the field direction: {cos}");
            checked += 1;
        }
    }
    assert!(checked > 100);
}
