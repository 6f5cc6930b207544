// File: crates/field-core/src/axis.rs
// Summary: Axis model with label, visible range and tick placement.

use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", -10.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", -10.0, 10.0)
    }

    /// Tick positions inside the visible range.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, target)
    }
}

/// Tick label text with just enough decimals for the tick step.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize };
    // avoid "-0"
    let v = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
