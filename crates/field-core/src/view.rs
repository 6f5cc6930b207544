// File: crates/field-core/src/view.rs
// First-class view state: visible ranges and the grid-bounded, center-anchored zoom.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::GridSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Full square of the grid.
    pub fn from_grid(grid: &GridSpec) -> Self {
        Self { x_min: grid.min(), x_max: grid.max(), y_min: grid.min(), y_max: grid.max() }
    }

    pub fn width(&self) -> f64 { self.x_max - self.x_min }
    pub fn height(&self) -> f64 { self.y_max - self.y_min }

    pub fn center(&self) -> (f64, f64) {
        ((self.x_max + self.x_min) / 2.0, (self.y_max + self.y_min) / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Scroll up / away: widen the window.
    Out,
    /// Scroll down / toward: narrow the window.
    In,
}

impl ZoomDirection {
    /// Map a vertical wheel delta to a direction; positive is scroll-up.
    pub fn from_wheel(dy: f64) -> Option<Self> {
        if dy > 0.0 {
            Some(ZoomDirection::Out)
        } else if dy < 0.0 {
            Some(ZoomDirection::In)
        } else {
            None
        }
    }
}

/// Zoom step constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub zoom_out_factor: f64,
    pub zoom_in_factor: f64,
    /// Steps producing a narrower window than this on either axis are rejected.
    pub min_extent: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { zoom_out_factor: 1.2, zoom_in_factor: 0.8, min_extent: 1e-2 }
    }
}

impl ZoomConfig {
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::Out => self.zoom_out_factor,
            ZoomDirection::In => self.zoom_in_factor,
        }
    }
}

/// Owns the visible window of the active plot. The window is always a subset
/// of the grid square and only changes through `on_scroll`.
#[derive(Clone, Debug)]
pub struct ViewportController {
    view: ViewState,
    grid_min: f64,
    grid_max: f64,
    config: ZoomConfig,
}

impl ViewportController {
    pub fn new(grid: &GridSpec, config: ZoomConfig) -> Self {
        Self { view: ViewState::from_grid(grid), grid_min: grid.min(), grid_max: grid.max(), config }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn grid_bounds(&self) -> (f64, f64) {
        (self.grid_min, self.grid_max)
    }

    pub fn reset(&mut self) -> ViewState {
        self.view = ViewState {
            x_min: self.grid_min,
            x_max: self.grid_max,
            y_min: self.grid_min,
            y_max: self.grid_max,
        };
        self.view
    }

    /// Apply one zoom step. Returns the committed bounds, or `None` when the
    /// step would shrink either axis below `min_extent` (state unchanged).
    pub fn on_scroll(&mut self, direction: ZoomDirection) -> Option<ViewState> {
        let scale = self.config.factor(direction);
        let v = self.view;
        let x_range = (v.x_max - v.x_min) / 2.0;
        let y_range = (v.y_max - v.y_min) / 2.0;
        let (x_center, y_center) = v.center();

        let new_x_range = x_range * scale;
        let new_y_range = y_range * scale;

        let next = ViewState {
            x_min: self.grid_min.max(x_center - new_x_range),
            x_max: self.grid_max.min(x_center + new_x_range),
            y_min: self.grid_min.max(y_center - new_y_range),
            y_max: self.grid_max.min(y_center + new_y_range),
        };

        if next.width() < self.config.min_extent || next.height() < self.config.min_extent {
            debug!(?direction, width = next.width(), height = next.height(), "zoom step rejected");
            return None;
        }
        self.view = next;
        debug!(?direction, ?next, "zoom step applied");
        Some(next)
    }
}
