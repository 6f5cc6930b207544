// File: crates/field-core/src/session.rs
// Summary: Interactive plotting session; owns the active field, grid and viewport.

use tracing::{info, warn};

use crate::charge::ChargeSet;
use crate::error::PlotError;
use crate::grid::GridSpec;
use crate::levels::ContourPlan;
use crate::render::{MarkerStyle, RenderAdapter};
use crate::request::{PlotInputs, PlotRequest};
use crate::sampler::{sample, SampledField};
use crate::view::{ViewState, ViewportController, ZoomConfig, ZoomDirection};

/// Decimal places of inline contour labels.
pub const LABEL_DECIMALS: usize = 2;

/// State of the last successful plot.
#[derive(Clone, Debug)]
pub struct ActivePlot {
    pub charges: ChargeSet,
    pub grid: GridSpec,
    pub field: SampledField,
    pub contours: Option<ContourPlan>,
    pub viewport: ViewportController,
}

#[derive(Debug, Default)]
pub struct Session {
    zoom: ZoomConfig,
    active: Option<ActivePlot>,
}

impl Session {
    pub fn new(zoom: ZoomConfig) -> Self {
        Self { zoom, active: None }
    }

    pub fn active(&self) -> Option<&ActivePlot> {
        self.active.as_ref()
    }

    pub fn view(&self) -> Option<ViewState> {
        self.active.as_ref().map(|p| p.viewport.view())
    }

    /// Parse raw inputs and plot. Validation failures leave the previous plot
    /// and the renderer untouched.
    pub fn submit<R: RenderAdapter + ?Sized>(&mut self, inputs: &PlotInputs, renderer: &mut R) -> Result<(), PlotError> {
        let request = PlotRequest::parse(inputs)?;
        self.request_plot(&request, renderer)
    }

    /// Sample the field, draw the full figure at the full grid bounds and make it
    /// the active plot. If the redraw fails the previous plot is drawn back into
    /// the renderer and stays active.
    pub fn request_plot<R: RenderAdapter + ?Sized>(&mut self, request: &PlotRequest, renderer: &mut R) -> Result<(), PlotError> {
        let field = sample(&request.charges, &request.grid);
        let contours = request
            .equipotentials
            .show
            .then(|| ContourPlan::plan(&field.v, request.equipotentials.level_count));
        let viewport = ViewportController::new(&request.grid, self.zoom);
        let plot = ActivePlot { charges: request.charges.clone(), grid: request.grid, field, contours, viewport };

        draw_scene(&plot, renderer);
        if let Err(err) = renderer.redraw() {
            self.restore(renderer);
            return Err(err.into());
        }

        info!(
            charges = plot.charges.len(),
            points = plot.grid.points(),
            equipotentials = plot.contours.is_some(),
            "plotted field"
        );
        self.active = Some(plot);
        Ok(())
    }

    /// One zoom step on the active plot. Returns `Ok(false)` when there is no
    /// plot or the step was rejected; the renderer is not touched in that case.
    pub fn request_zoom<R: RenderAdapter + ?Sized>(&mut self, direction: ZoomDirection, renderer: &mut R) -> Result<bool, PlotError> {
        self.step_view(renderer, |viewport| viewport.on_scroll(direction))
    }

    /// Back to the full grid bounds. Returns `Ok(false)` without a plot.
    pub fn reset_view<R: RenderAdapter + ?Sized>(&mut self, renderer: &mut R) -> Result<bool, PlotError> {
        self.step_view(renderer, |viewport| Some(viewport.reset()))
    }

    /// Apply `step` to a copy of the viewport; the copy replaces the active
    /// viewport only once the redraw succeeds.
    fn step_view<R, F>(&mut self, renderer: &mut R, step: F) -> Result<bool, PlotError>
    where
        R: RenderAdapter + ?Sized,
        F: FnOnce(&mut ViewportController) -> Option<ViewState>,
    {
        let Some(plot) = self.active.as_mut() else {
            return Ok(false);
        };
        let mut next = plot.viewport.clone();
        let Some(view) = step(&mut next) else {
            return Ok(false);
        };
        renderer.set_axis_bounds(view);
        if let Err(err) = renderer.redraw() {
            renderer.set_axis_bounds(plot.viewport.view());
            return Err(err.into());
        }
        plot.viewport = next;
        Ok(true)
    }

    /// Put the active plot back into a renderer whose scene was replaced by a
    /// failed plot. Without an active plot the renderer is left cleared.
    fn restore<R: RenderAdapter + ?Sized>(&self, renderer: &mut R) {
        match &self.active {
            Some(plot) => {
                draw_scene(plot, renderer);
                if let Err(err) = renderer.redraw() {
                    warn!(error = %err, "could not redraw the previous plot");
                }
            }
            None => renderer.clear(),
        }
    }
}

/// Issue the full draw sequence for `plot` at its current view, without presenting.
fn draw_scene<R: RenderAdapter + ?Sized>(plot: &ActivePlot, renderer: &mut R) {
    let field = &plot.field;
    renderer.clear();
    renderer.draw_streamlines(&field.x, &field.y, &field.ex, &field.ey);
    if let Some(plan) = &plot.contours {
        let handle = renderer.draw_contours(&field.x, &field.y, &field.v, &plan.levels);
        renderer.label_contours(handle, LABEL_DECIMALS);
    }
    for c in &plot.charges {
        renderer.draw_marker(c.x, c.y, MarkerStyle::for_charge(c));
    }
    renderer.set_axis_bounds(plot.viewport.view());
    renderer.set_equal_aspect();
}
