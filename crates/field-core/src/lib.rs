// File: crates/field-core/src/lib.rs
// Summary: Core library entry point; exports the field sampling, viewport and rendering API.

pub mod axis;
pub mod charge;
pub mod chart;
pub mod config;
pub mod contour;
pub mod error;
pub mod grid;
pub mod input;
pub mod levels;
pub mod render;
pub mod request;
pub mod sampler;
pub mod scale;
pub mod session;
pub mod streamline;
pub mod text;
pub mod theme;
pub mod view;

pub use axis::Axis;
pub use charge::{ChargeSet, PointCharge};
pub use chart::{FieldChart, Frame, RenderOptions};
pub use config::FieldConfig;
pub use contour::{contour_lines, ContourLine};
pub use error::{LineFault, PlotError, ValidationError};
pub use grid::{linspace, meshgrid, GridSpec};
pub use input::read_charges_text;
pub use levels::ContourPlan;
pub use render::{ContourHandle, MarkerStyle, RenderAdapter};
pub use request::{EquipotentialOptions, PlotInputs, PlotRequest};
pub use sampler::{sample, SampledField};
pub use session::{ActivePlot, Session};
pub use streamline::{trace_streamlines, Streamline, StreamlineConfig};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::{ViewState, ViewportController, ZoomConfig, ZoomDirection};
