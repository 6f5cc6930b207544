// File: crates/field-demo/src/main.rs
// Summary: Demo loads a charge file (text or CSV), plots field lines and equipotentials, writes PNGs.

use anyhow::{Context, Result};
use field_core::{read_charges_text, FieldChart, FieldConfig, Session, ZoomDirection};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_CHARGES: &str = "0 0 1\n1 0 -1\n";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [charges file] [config.toml]
    let mut args = std::env::args().skip(1);
    let charges_path = args.next().map(PathBuf::from);
    let config = match args.next() {
        Some(p) => FieldConfig::from_file(&p).with_context(|| format!("loading config '{p}'"))?,
        None => FieldConfig::default(),
    };

    let text = match &charges_path {
        Some(p) => read_charges_text(p)?,
        None => {
            info!("no charge file given, plotting the built-in dipole");
            SAMPLE_CHARGES.to_string()
        }
    };

    let mut chart = FieldChart::new(config.render.to_options());
    let mut session = Session::new(config.zoom);
    session
        .submit(&config.plot_inputs(text), &mut chart)
        .context("plot failed")?;

    let stem = charges_path
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("dipole");

    // 1) Full grid
    let out_full = out_name_with(stem, "full");
    chart.render_to_png(&out_full)?;
    info!(path = %out_full.display(), "wrote full view");

    // 2) A few zoom-in steps about the centre
    let mut steps = 0;
    while steps < 5 && session.request_zoom(ZoomDirection::In, &mut chart)? {
        steps += 1;
    }
    let out_zoom = out_name_with(stem, "zoom");
    chart.render_to_png(&out_zoom)?;
    info!(path = %out_zoom.display(), steps, "wrote zoomed view");

    Ok(())
}

/// Produce output file name like target/out/field_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("field_{suffix}.png"));
    } else {
        out.push(format!("field_{stem}_{suffix}.png"));
    }
    out
}
