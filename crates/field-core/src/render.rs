// File: crates/field-core/src/render.rs
// Summary: Renderer-agnostic drawing interface the plot session drives.

use anyhow::Result;
use ndarray::Array2;

use crate::charge::PointCharge;
use crate::view::ViewState;

/// Visual class of a charge marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    Positive,
    Negative,
}

impl MarkerStyle {
    pub fn for_charge(c: &PointCharge) -> Self {
        if c.is_positive() { MarkerStyle::Positive } else { MarkerStyle::Negative }
    }
}

/// Handle to a set of contours drawn by `draw_contours`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContourHandle(pub usize);

/// Drawing capability consumed by the session. Arrays follow the sampler layout
/// (row index = y, column index = x). Nothing is shown until `redraw`.
pub trait RenderAdapter {
    /// Drop everything drawn so far (a new figure).
    fn clear(&mut self);
    fn draw_streamlines(&mut self, x: &Array2<f64>, y: &Array2<f64>, ex: &Array2<f64>, ey: &Array2<f64>);
    fn draw_contours(&mut self, x: &Array2<f64>, y: &Array2<f64>, v: &Array2<f64>, levels: &[f64]) -> ContourHandle;
    /// Request inline numeric labels on a contour set, `decimals` digits after the point.
    fn label_contours(&mut self, handle: ContourHandle, decimals: usize);
    fn draw_marker(&mut self, x: f64, y: f64, style: MarkerStyle);
    fn set_axis_bounds(&mut self, view: ViewState);
    fn set_equal_aspect(&mut self);
    fn redraw(&mut self) -> Result<()>;
}
