// File: crates/field-core/src/sampler.rs
// Summary: Coulomb superposition of point charges over a square meshgrid (field + potential).

use ndarray::{Array2, Zip};
use tracing::debug;

use crate::charge::ChargeSet;
use crate::grid::{locate, meshgrid, CellPos, GridSpec};

/// Replacement for an exactly-zero squared distance, keeps the division finite
/// when a sample lands on a charge.
pub const SINGULARITY_R2: f64 = 1e-20;

/// Sampled field over the grid. Row index follows y, column index follows x.
#[derive(Clone, Debug)]
pub struct SampledField {
    xs: Vec<f64>,
    ys: Vec<f64>,
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub ex: Array2<f64>,
    pub ey: Array2<f64>,
    pub v: Array2<f64>,
}

/// Sample `E = sum q * r_vec / r^3` and `V = sum q / r` (unit Coulomb constant)
/// for every grid point, charges accumulated in input order.
pub fn sample(charges: &ChargeSet, grid: &GridSpec) -> SampledField {
    let xs = grid.axis();
    let ys = grid.axis();
    let (x, y) = meshgrid(&xs, &ys);
    let shape = x.raw_dim();
    let mut ex = Array2::<f64>::zeros(shape);
    let mut ey = Array2::<f64>::zeros(shape);
    let mut v = Array2::<f64>::zeros(shape);

    for c in charges {
        Zip::from(&mut ex)
            .and(&mut ey)
            .and(&mut v)
            .and(&x)
            .and(&y)
            .for_each(|ex, ey, v, &px, &py| {
                let dx = px - c.x;
                let dy = py - c.y;
                let mut r2 = dx * dx + dy * dy;
                if r2 == 0.0 {
                    r2 = SINGULARITY_R2;
                }
                let r = r2.sqrt();
                let r3 = r2 * r;
                *ex += c.q * dx / r3;
                *ey += c.q * dy / r3;
                *v += c.q / r;
            });
    }

    debug!(charges = charges.len(), points = grid.points(), "sampled field");
    SampledField { xs, ys, x, y, ex, ey, v }
}

impl SampledField {
    /// Samples per axis.
    pub fn points(&self) -> usize {
        self.xs.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.v.dim()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Column index of the sample nearest to `x`.
    pub fn nearest_col(&self, x: f64) -> usize {
        nearest(&self.xs, x)
    }

    /// Row index of the sample nearest to `y`.
    pub fn nearest_row(&self, y: f64) -> usize {
        nearest(&self.ys, y)
    }

    /// Potential at the sample nearest to `(x, y)`.
    pub fn potential_near(&self, x: f64, y: f64) -> f64 {
        self.v[[self.nearest_row(y), self.nearest_col(x)]]
    }

    /// Bilinear interpolation of `(Ex, Ey)` at a world position; `None` outside the grid.
    /// Streamline tracing samples the field the same way.
    pub fn field_at(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let cell = CellPos::find(&self.xs, &self.ys, x, y)?;
        Some((cell.lerp(&self.ex), cell.lerp(&self.ey)))
    }
}

fn nearest(axis: &[f64], value: f64) -> usize {
    match locate(axis, value) {
        Some((i, t)) if t >= 0.5 => (i + 1).min(axis.len() - 1),
        Some((i, _)) => i,
        None if axis.first().is_some_and(|&a| value < a) => 0,
        None => axis.len().saturating_sub(1),
    }
}
