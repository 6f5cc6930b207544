// File: crates/field-core/src/contour.rs
// Summary: Marching-squares iso-line extraction over a sampled scalar grid, in world coordinates.

use std::collections::HashMap;

use ndarray::Array2;

/// One connected iso-line.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourLine {
    pub level: f64,
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

impl ContourLine {
    /// Anchor for an inline label: the middle vertex of the polyline.
    pub fn label_anchor(&self) -> Option<(f64, f64)> {
        self.points.get(self.points.len() / 2).copied()
    }

    /// Polyline length in world units.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| ((w[1].0 - w[0].0).powi(2) + (w[1].1 - w[0].1).powi(2)).sqrt())
            .sum()
    }
}

/// Cell edge crossed by an iso-line. Horizontal edge (i, j) joins samples
/// (i, j)-(i, j+1); vertical edge joins (i, j)-(i+1, j).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Edge {
    H(usize, usize),
    V(usize, usize),
}

/// Extract the iso-lines of `values` at each level. `x` / `y` are the meshgrid
/// (`x[[i, j]] = xs[j]`, `y[[i, j]] = ys[i]`).
pub fn contour_lines(x: &Array2<f64>, y: &Array2<f64>, values: &Array2<f64>, levels: &[f64]) -> Vec<ContourLine> {
    let (rows, cols) = values.dim();
    if rows < 2 || cols < 2 || x.dim() != values.dim() || y.dim() != values.dim() {
        return Vec::new();
    }
    let xs: Vec<f64> = x.row(0).to_vec();
    let ys: Vec<f64> = y.column(0).to_vec();

    let mut out = Vec::new();
    for &level in levels {
        if !level.is_finite() {
            continue;
        }
        let segments = march(values, level);
        for chain in join(&segments) {
            let points: Vec<(f64, f64)> = chain.iter().map(|e| edge_point(*e, values, &xs, &ys, level)).collect();
            let closed = chain.len() > 2 && chain.first() == chain.last();
            out.push(ContourLine { level, points, closed });
        }
    }
    out
}

fn march(values: &Array2<f64>, level: f64) -> Vec<(Edge, Edge)> {
    let (rows, cols) = values.dim();
    let mut segments = Vec::new();
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            // corners: a=(i,j) b=(i,j+1) c=(i+1,j+1) d=(i+1,j)
            let a = values[[i, j]];
            let b = values[[i, j + 1]];
            let c = values[[i + 1, j + 1]];
            let d = values[[i + 1, j]];
            if a.is_nan() || b.is_nan() || c.is_nan() || d.is_nan() {
                continue;
            }
            let mut case = 0u8;
            if a >= level { case |= 1; }
            if b >= level { case |= 2; }
            if c >= level { case |= 4; }
            if d >= level { case |= 8; }

            let low = Edge::H(i, j);
            let high = Edge::H(i + 1, j);
            let left = Edge::V(i, j);
            let right = Edge::V(i, j + 1);

            match case {
                0 | 15 => {}
                1 | 14 => segments.push((left, low)),
                2 | 13 => segments.push((low, right)),
                3 | 12 => segments.push((left, right)),
                4 | 11 => segments.push((right, high)),
                6 | 9 => segments.push((low, high)),
                7 | 8 => segments.push((left, high)),
                5 | 10 => {
                    // saddle: the cell centre decides which corners connect
                    let centre_high = (a + b + c + d) / 4.0 >= level;
                    let a_high = case == 5;
                    if centre_high == a_high {
                        segments.push((left, high));
                        segments.push((low, right));
                    } else {
                        segments.push((left, low));
                        segments.push((right, high));
                    }
                }
                _ => unreachable!("case is a 4-bit mask"),
            }
        }
    }
    segments
}

/// Chain segments into polylines through their shared edges.
fn join(segments: &[(Edge, Edge)]) -> Vec<Vec<Edge>> {
    let mut by_edge: HashMap<Edge, Vec<usize>> = HashMap::with_capacity(segments.len() * 2);
    for (k, &(p, q)) in segments.iter().enumerate() {
        by_edge.entry(p).or_default().push(k);
        by_edge.entry(q).or_default().push(k);
    }
    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    let next_from = |edge: Edge, used: &[bool]| -> Option<usize> {
        by_edge.get(&edge)?.iter().copied().find(|&k| !used[k])
    };

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let (p, q) = segments[start];
        let mut forward = vec![p, q];
        // extend past q
        let mut tail = q;
        while let Some(k) = next_from(tail, &used) {
            used[k] = true;
            let (s, t) = segments[k];
            tail = if s == tail { t } else { s };
            forward.push(tail);
        }
        // extend before p (only reachable for open lines)
        let mut head = p;
        let mut backward = Vec::new();
        while let Some(k) = next_from(head, &used) {
            used[k] = true;
            let (s, t) = segments[k];
            head = if s == head { t } else { s };
            backward.push(head);
        }
        backward.reverse();
        backward.extend(forward);
        chains.push(backward);
    }
    chains
}

fn edge_point(edge: Edge, values: &Array2<f64>, xs: &[f64], ys: &[f64], level: f64) -> (f64, f64) {
    let frac = |v0: f64, v1: f64| {
        let dv = v1 - v0;
        if dv.abs() < f64::EPSILON { 0.5 } else { ((level - v0) / dv).clamp(0.0, 1.0) }
    };
    match edge {
        Edge::H(i, j) => {
            let t = frac(values[[i, j]], values[[i, j + 1]]);
            (xs[j] + t * (xs[j + 1] - xs[j]), ys[i])
        }
        Edge::V(i, j) => {
            let t = frac(values[[i, j]], values[[i + 1, j]]);
            (xs[j], ys[i] + t * (ys[i + 1] - ys[i]))
        }
    }
}
