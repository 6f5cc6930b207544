// File: crates/field-core/src/levels.rs
// Summary: Equipotential level planning from the sampled potential range.

use ndarray::Array2;
use tracing::debug;

use crate::error::ValidationError;
use crate::grid::linspace;

pub const MIN_LEVELS: usize = 1;
pub const MAX_LEVELS: usize = 100;
pub const DEFAULT_LEVELS: usize = 20;

/// Evenly spaced iso-values over `[v_min, v_max]`, first = min, last = max.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourPlan {
    pub level_count: usize,
    pub levels: Vec<f64>,
}

impl ContourPlan {
    /// Plan `level_count` levels over the finite range of `v`. A flat potential
    /// is widened to `[v - 1, v + 1]` so the spacing stays well-defined.
    /// Counts outside `MIN_LEVELS..=MAX_LEVELS` are clamped into that range.
    pub fn plan(v: &Array2<f64>, level_count: usize) -> Self {
        let level_count = level_count.clamp(MIN_LEVELS, MAX_LEVELS);
        let (mut v_min, mut v_max) = finite_range(v).unwrap_or((0.0, 0.0));
        if v_min == v_max {
            v_min -= 1.0;
            v_max += 1.0;
        }
        let levels = linspace(v_min, v_max, level_count);
        debug!(level_count, v_min, v_max, "planned equipotential levels");
        Self { level_count, levels }
    }
}

/// Validate a requested level count against `MIN_LEVELS..=MAX_LEVELS`.
pub fn check_level_count(n: i64) -> Result<usize, ValidationError> {
    match usize::try_from(n) {
        Ok(k) if (MIN_LEVELS..=MAX_LEVELS).contains(&k) => Ok(k),
        _ => Err(ValidationError::InvalidLevelCount(n)),
    }
}

fn finite_range(v: &Array2<f64>) -> Option<(f64, f64)> {
    v.iter().filter(|x| x.is_finite()).fold(None, |acc, &x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}
