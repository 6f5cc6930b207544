// File: crates/field-core/src/streamline.rs
// Summary: Field-line tracing over a sampled vector field (RK4 on the unit direction, occupancy mask seeding).

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::grid::CellPos;

/// Streamline layout parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamlineConfig {
    /// Line density; the occupancy mask has `30 * density` cells per axis.
    pub density: f64,
    /// Integration step as a fraction of a mask cell.
    pub step_fraction: f64,
    /// Upper bound on steps per direction.
    pub max_steps: usize,
    /// Lines with fewer vertices are dropped.
    pub min_points: usize,
}

impl Default for StreamlineConfig {
    fn default() -> Self {
        Self { density: 1.5, step_fraction: 0.25, max_steps: 2000, min_points: 6 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Streamline {
    pub points: Vec<(f64, f64)>,
}

impl Streamline {
    /// Arrow anchor: midpoint vertex and unit direction along the line.
    pub fn arrow(&self) -> Option<((f64, f64), (f64, f64))> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        let mid = n / 2;
        let (a, b) = if mid + 1 < n { (self.points[mid], self.points[mid + 1]) } else { (self.points[mid - 1], self.points[mid]) };
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let m = (dx * dx + dy * dy).sqrt();
        if m == 0.0 || !m.is_finite() {
            return None;
        }
        Some((a, (dx / m, dy / m)))
    }
}

/// Bilinear lookup into the sampled components on an evenly spaced axis pair.
struct FieldGrid<'a> {
    xs: Vec<f64>,
    ys: Vec<f64>,
    ex: &'a Array2<f64>,
    ey: &'a Array2<f64>,
}

impl FieldGrid<'_> {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1], self.ys[0], self.ys[self.ys.len() - 1])
    }

    fn sample(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let cell = CellPos::find(&self.xs, &self.ys, x, y)?;
        Some((cell.lerp(self.ex), cell.lerp(self.ey)))
    }

    /// Unit field direction, `None` outside the grid or where the field vanishes.
    fn direction(&self, x: f64, y: f64, sign: f64) -> Option<(f64, f64)> {
        let (ex, ey) = self.sample(x, y)?;
        let m = (ex * ex + ey * ey).sqrt();
        if !m.is_finite() || m < 1e-12 {
            return None;
        }
        Some((sign * ex / m, sign * ey / m))
    }

    fn rk4(&self, x: f64, y: f64, h: f64, sign: f64) -> Option<(f64, f64)> {
        let (k1x, k1y) = self.direction(x, y, sign)?;
        let (k2x, k2y) = self.direction(x + 0.5 * h * k1x, y + 0.5 * h * k1y, sign)?;
        let (k3x, k3y) = self.direction(x + 0.5 * h * k2x, y + 0.5 * h * k2y, sign)?;
        let (k4x, k4y) = self.direction(x + h * k3x, y + h * k3y, sign)?;
        let dx = (k1x + 2.0 * k2x + 2.0 * k3x + k4x) / 6.0;
        let dy = (k1y + 2.0 * k2y + 2.0 * k3y + k4y) / 6.0;
        Some((x + h * dx, y + h * dy))
    }
}

/// Coarse grid marking which regions already carry a line.
struct Mask {
    n: usize,
    cells: Vec<bool>,
    x0: f64,
    y0: f64,
    cell_w: f64,
    cell_h: f64,
}

impl Mask {
    fn cell(&self, x: f64, y: f64) -> (usize, usize) {
        let cx = ((x - self.x0) / self.cell_w).floor().clamp(0.0, (self.n - 1) as f64) as usize;
        let cy = ((y - self.y0) / self.cell_h).floor().clamp(0.0, (self.n - 1) as f64) as usize;
        (cx, cy)
    }

    fn idx(&self, c: (usize, usize)) -> usize {
        c.1 * self.n + c.0
    }

    fn centre(&self, c: (usize, usize)) -> (f64, f64) {
        (self.x0 + (c.0 as f64 + 0.5) * self.cell_w, self.y0 + (c.1 as f64 + 0.5) * self.cell_h)
    }
}

/// Trace streamlines of `(ex, ey)` over the meshgrid `(x, y)`.
pub fn trace_streamlines(
    x: &Array2<f64>,
    y: &Array2<f64>,
    ex: &Array2<f64>,
    ey: &Array2<f64>,
    config: &StreamlineConfig,
) -> Vec<Streamline> {
    let (rows, cols) = ex.dim();
    if rows < 2 || cols < 2 || ey.dim() != ex.dim() || x.dim() != ex.dim() || y.dim() != ex.dim() {
        return Vec::new();
    }
    let field = FieldGrid { xs: x.row(0).to_vec(), ys: y.column(0).to_vec(), ex, ey };
    let (x0, x1, y0, y1) = field.bounds();
    if !(x1 > x0 && y1 > y0) {
        return Vec::new();
    }

    let n = ((30.0 * config.density).round() as usize).max(1);
    let mut mask = Mask {
        n,
        cells: vec![false; n * n],
        x0,
        y0,
        cell_w: (x1 - x0) / n as f64,
        cell_h: (y1 - y0) / n as f64,
    };
    let h = config.step_fraction * mask.cell_w.min(mask.cell_h);

    let mut lines = Vec::new();
    for seed in seed_order(n) {
        if mask.cells[mask.idx(seed)] {
            continue;
        }
        let (sx, sy) = mask.centre(seed);
        if field.direction(sx, sy, 1.0).is_none() {
            continue;
        }
        let seed_idx = mask.idx(seed);
        let mut claimed = vec![seed_idx];
        mask.cells[seed_idx] = true;

        let mut backward = walk(&field, &mut mask, &mut claimed, seed, (sx, sy), h, -1.0, config.max_steps);
        let forward = walk(&field, &mut mask, &mut claimed, seed, (sx, sy), h, 1.0, config.max_steps);

        backward.reverse();
        backward.push((sx, sy));
        backward.extend(forward);

        if backward.len() < config.min_points {
            for k in claimed {
                mask.cells[k] = false;
            }
            continue;
        }
        lines.push(Streamline { points: backward });
    }
    tracing::debug!(lines = lines.len(), mask = n, "traced streamlines");
    lines
}

#[allow(clippy::too_many_arguments)]
fn walk(
    field: &FieldGrid<'_>,
    mask: &mut Mask,
    claimed: &mut Vec<usize>,
    seed: (usize, usize),
    start: (f64, f64),
    h: f64,
    sign: f64,
    max_steps: usize,
) -> Vec<(f64, f64)> {
    let mut pts = Vec::new();
    let (mut x, mut y) = start;
    let mut last = seed;
    let mut prev_step: Option<(f64, f64)> = None;
    for _ in 0..max_steps {
        let Some((nx, ny)) = field.rk4(x, y, h, sign) else { break };
        let (bx0, bx1, by0, by1) = field.bounds();
        if nx < bx0 || nx > bx1 || ny < by0 || ny > by1 {
            break;
        }
        // stepping back over a source or sink
        let step = (nx - x, ny - y);
        if prev_step.is_some_and(|(px, py)| px * step.0 + py * step.1 < 0.0) {
            break;
        }
        prev_step = Some(step);
        let cell = mask.cell(nx, ny);
        if cell != last {
            let k = mask.idx(cell);
            if mask.cells[k] {
                break;
            }
            mask.cells[k] = true;
            claimed.push(k);
            last = cell;
        }
        x = nx;
        y = ny;
        pts.push((x, y));
    }
    pts
}

/// Mask cells in spiral order, border ring first.
fn seed_order(n: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(n * n);
    let (mut lo_x, mut hi_x, mut lo_y, mut hi_y) = (0isize, n as isize - 1, 0isize, n as isize - 1);
    while lo_x <= hi_x && lo_y <= hi_y {
        for cx in lo_x..=hi_x {
            out.push((cx as usize, lo_y as usize));
        }
        for cy in lo_y + 1..=hi_y {
            out.push((hi_x as usize, cy as usize));
        }
        if lo_y < hi_y {
            for cx in (lo_x..hi_x).rev() {
                out.push((cx as usize, hi_y as usize));
            }
        }
        if lo_x < hi_x {
            for cy in (lo_y + 1..hi_y).rev() {
                out.push((lo_x as usize, cy as usize));
            }
        }
        lo_x += 1;
        hi_x -= 1;
        lo_y += 1;
        hi_y -= 1;
    }
    out
}
