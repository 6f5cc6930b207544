// File: crates/field-examples/src/bin/quadrupole.rs
// Summary: Quadrupole on a tighter grid, dark theme, 30 equipotentials.

use field_core::{theme, FieldChart, PlotInputs, RenderOptions, Session};

fn main() -> anyhow::Result<()> {
    let inputs = PlotInputs {
        grid_min: "-4".into(),
        grid_max: "4".into(),
        grid_points: "300".into(),
        level_count: 30,
        ..PlotInputs::with_charges("1 1 1\n-1 -1 1\n1 -1 -1\n-1 1 -1")
    };

    let opts = RenderOptions { theme: theme::Theme::dark(), title: "Quadrupole".into(), ..RenderOptions::default() };
    let mut chart = FieldChart::new(opts);
    Session::default().submit(&inputs, &mut chart)?;

    let out = std::path::PathBuf::from("target/out/example_quadrupole.png");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
