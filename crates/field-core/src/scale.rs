// File: crates/field-core/src/scale.rs
// Summary: World <-> pixel transform for the plot area, with optional equal aspect.

use crate::view::ViewState;

/// Pixel margins around the data area (title on top, tick labels left and bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Insets {
    fn default() -> Self {
        Self { left: 64, right: 24, top: 44, bottom: 52 }
    }
}

/// Pixel rectangle of the data area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Linear map from the visible world window onto a pixel rectangle. With equal
/// aspect one world unit is the same pixel length on both axes and the data
/// area is centred inside the available rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub view: ViewState,
    pub rect: PlotRect,
    sx: f64,
    sy: f64,
}

impl PlotTransform {
    pub fn new(view: ViewState, avail: PlotRect, equal_aspect: bool) -> Self {
        let xspan = view.width().max(1e-12);
        let yspan = view.height().max(1e-12);
        let mut sx = avail.width() as f64 / xspan;
        let mut sy = avail.height() as f64 / yspan;
        let mut rect = avail;
        if equal_aspect {
            let s = sx.min(sy);
            sx = s;
            sy = s;
            let w = (xspan * s) as f32;
            let h = (yspan * s) as f32;
            let cx = (avail.left + avail.right) * 0.5;
            let cy = (avail.top + avail.bottom) * 0.5;
            rect = PlotRect { left: cx - w * 0.5, right: cx + w * 0.5, top: cy - h * 0.5, bottom: cy + h * 0.5 };
        }
        Self { view, rect, sx, sy }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (
            self.rect.left + ((x - self.view.x_min) * self.sx) as f32,
            self.rect.bottom - ((y - self.view.y_min) * self.sy) as f32,
        )
    }

    /// Pixels per world unit along x.
    pub fn pixels_per_unit(&self) -> f64 {
        self.sx
    }
}
