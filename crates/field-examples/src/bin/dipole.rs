// File: crates/field-examples/src/bin/dipole.rs
// Summary: Minimal example that plots a dipole to PNG.

use field_core::{FieldChart, PlotInputs, RenderOptions, Session};

fn main() -> anyhow::Result<()> {
    let inputs = PlotInputs::with_charges("0 0 1\n1 0 -1");

    let mut chart = FieldChart::new(RenderOptions::default());
    Session::default().submit(&inputs, &mut chart)?;

    let out = std::path::PathBuf::from("target/out/example_dipole.png");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
