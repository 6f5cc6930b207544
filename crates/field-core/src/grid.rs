// File: crates/field-core/src/grid.rs
// Summary: Square sampling grid spec, linspace/meshgrid and tick layout helpers.

use ndarray::Array2;

use crate::charge::parse_finite;
use crate::error::ValidationError;

/// Soft cap on samples per axis; a synchronous sample of N*N cells per charge
/// stays interactive below this.
pub const MAX_POINTS_PER_AXIS: usize = 2000;

/// Square domain `[min, max] x [min, max]` sampled with `points` samples per axis.
/// Contract: `min < max`, `points > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    min: f64,
    max: f64,
    points: usize,
}

impl GridSpec {
    pub fn try_new(min: f64, max: f64, points: usize) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ValidationError::InvalidGrid("min and max must be finite numbers".into()));
        }
        if min >= max {
            return Err(ValidationError::InvalidGrid(format!("min ({min}) must be less than max ({max})")));
        }
        if points == 0 {
            return Err(ValidationError::InvalidGrid("point count must be positive".into()));
        }
        if points > MAX_POINTS_PER_AXIS {
            return Err(ValidationError::InvalidGrid(format!(
                "point count {points} exceeds the limit of {MAX_POINTS_PER_AXIS}"
            )));
        }
        Ok(Self { min, max, points })
    }

    /// Parse the three text fields (min, max, point count).
    pub fn parse(min: &str, max: &str, points: &str) -> Result<Self, ValidationError> {
        let min_v = parse_finite(min)
            .ok_or_else(|| ValidationError::InvalidGrid(format!("min '{}' is not a number", min.trim())))?;
        let max_v = parse_finite(max)
            .ok_or_else(|| ValidationError::InvalidGrid(format!("max '{}' is not a number", max.trim())))?;
        let n: i64 = points
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidGrid(format!("point count '{}' is not an integer", points.trim())))?;
        if n <= 0 {
            return Err(ValidationError::InvalidGrid("point count must be positive".into()));
        }
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        Self::try_new(min_v, max_v, n)
    }

    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }
    pub const fn points(&self) -> usize { self.points }

    /// Sample coordinates along either axis.
    pub fn axis(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.points)
    }

    /// Spacing between adjacent samples (0 for a single sample).
    pub fn step(&self) -> f64 {
        if self.points < 2 { 0.0 } else { (self.max - self.min) / (self.points as f64 - 1.0) }
    }
}

/// `steps` evenly spaced values over `[start, end]` inclusive. One step yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            // pin the last value so it is exactly `end`
            (0..steps).map(|i| if i + 1 == steps { end } else { start + step * i as f64 }).collect()
        }
    }
}

/// Coordinate meshgrid: `X[[i, j]] = xs[j]`, `Y[[i, j]] = ys[i]`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    let x = Array2::from_shape_fn(shape, |(_, j)| xs[j]);
    let y = Array2::from_shape_fn(shape, |(i, _)| ys[i]);
    (x, y)
}

/// Grid cell holding a world position, with the fractional offsets inside it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellPos {
    i0: usize,
    i1: usize,
    j0: usize,
    j1: usize,
    tx: f64,
    ty: f64,
}

impl CellPos {
    /// Locate `(x, y)` on the axes of a meshgrid; `None` outside the grid or for
    /// non-finite input.
    pub(crate) fn find(xs: &[f64], ys: &[f64], x: f64, y: f64) -> Option<Self> {
        let (j0, tx) = locate(xs, x)?;
        let (i0, ty) = locate(ys, y)?;
        let j1 = (j0 + 1).min(xs.len() - 1);
        let i1 = (i0 + 1).min(ys.len() - 1);
        Some(Self { i0, i1, j0, j1, tx, ty })
    }

    /// Bilinear interpolation of `a` (row follows y, column follows x).
    pub(crate) fn lerp(&self, a: &Array2<f64>) -> f64 {
        let (i0, i1, j0, j1, tx, ty) = (self.i0, self.i1, self.j0, self.j1, self.tx, self.ty);
        let top = a[[i0, j0]] * (1.0 - tx) + a[[i0, j1]] * tx;
        let bot = a[[i1, j0]] * (1.0 - tx) + a[[i1, j1]] * tx;
        top * (1.0 - ty) + bot * ty
    }
}

/// Cell index and fractional offset of `value` along an ascending, evenly spaced axis.
pub(crate) fn locate(axis: &[f64], value: f64) -> Option<(usize, f64)> {
    let (&first, &last) = (axis.first()?, axis.last()?);
    if !value.is_finite() || value < first || value > last {
        return None;
    }
    if axis.len() == 1 {
        return Some((0, 0.0));
    }
    let step = (last - first) / (axis.len() - 1) as f64;
    let pos = (value - first) / step;
    let i = (pos.floor() as usize).min(axis.len() - 2);
    Some((i, (pos - i as f64).clamp(0.0, 1.0)))
}

/// Round tick positions (1/2/5 x 10^k) covering `[min, max]`, about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 { 1.0 } else if norm < 3.0 { 2.0 } else if norm < 7.0 { 5.0 } else { 10.0 };
    let step = nice * mag;
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
