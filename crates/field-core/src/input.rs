// File: crates/field-core/src/input.rs
// Summary: Charge file loading for the binaries; plain `x y q` text or CSV with x,y,q headers.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a charge file into the line-per-charge text form accepted by
/// [`crate::ChargeSet::parse`]. CSV rows become lines in row order, so a
/// reported line number is the data row number.
pub fn read_charges_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        csv_to_text(path)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read charges '{}'", path.display()))
    }
}

fn csv_to_text(path: &Path) -> Result<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(ix), Some(iy), Some(iq)) = (idx(&["x"]), idx(&["y"]), idx(&["q", "charge"])) else {
        anyhow::bail!("'{}': expected x, y and q columns, found {:?}", path.display(), headers);
    };

    let mut lines = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        let cell = |i: usize| single_value(&rec, i, &headers[i], row + 1, path);
        lines.push(format!("{} {} {}", cell(ix)?, cell(iy)?, cell(iq)?));
    }
    tracing::debug!(rows = lines.len(), path = %path.display(), "loaded charge csv");
    Ok(lines.join("\n"))
}

/// The cell at `i`, which must hold exactly one token so the joined line
/// splits back into the same three fields.
fn single_value<'r>(rec: &'r csv::StringRecord, i: usize, header: &str, row: usize, path: &Path) -> Result<&'r str> {
    let value = rec.get(i).unwrap_or("");
    if value.split_whitespace().count() != 1 {
        anyhow::bail!(
            "'{}': data row {row}: column '{header}' must hold a single value, found {value:?}",
            path.display()
        );
    }
    Ok(value)
}
