// File: crates/field-core/src/config.rs
// Summary: TOML configuration for the plotter binaries; every section optional with UI defaults.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chart::RenderOptions;
use crate::grid::{GridSpec, MAX_POINTS_PER_AXIS};
use crate::levels::{DEFAULT_LEVELS, MAX_LEVELS, MIN_LEVELS};
use crate::request::PlotInputs;
use crate::streamline::StreamlineConfig;
use crate::theme;
use crate::view::ZoomConfig;

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { min: -10.0, max: 10.0, points: 200 }
    }
}

impl GridConfig {
    fn validate(&self) -> Result<()> {
        GridSpec::try_new(self.min, self.max, self.points).map_err(|e| anyhow!("[grid] {e}"))?;
        Ok(())
    }
}

/// Equipotential configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipotentialConfig {
    pub show: bool,
    pub levels: usize,
}

impl Default for EquipotentialConfig {
    fn default() -> Self {
        Self { show: true, levels: DEFAULT_LEVELS }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub draw_labels: bool,
    pub title: String,
    pub streamlines: StreamlineConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let opts = RenderOptions::default();
        Self {
            width: opts.width,
            height: opts.height,
            theme: opts.theme.name.to_string(),
            draw_labels: opts.draw_labels,
            title: opts.title,
            streamlines: opts.streamlines,
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(anyhow!(
                "Image dimensions must be positive (width={}, height={})",
                self.width,
                self.height
            ));
        }
        if !self.streamlines.density.is_finite() || self.streamlines.density <= 0.0 {
            return Err(anyhow!("streamline density must be positive, got {}", self.streamlines.density));
        }
        if !self.streamlines.step_fraction.is_finite() || self.streamlines.step_fraction <= 0.0 {
            return Err(anyhow!("streamline step_fraction must be positive, got {}", self.streamlines.step_fraction));
        }
        Ok(())
    }

    /// Build render options; unknown theme names fall back to the default theme.
    pub fn to_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.width = self.width;
        opts.height = self.height;
        opts.theme = theme::find(&self.theme);
        opts.draw_labels = self.draw_labels;
        opts.title = self.title.clone();
        opts.streamlines = self.streamlines;
        opts
    }
}

/// Complete plotter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub grid: GridConfig,
    pub equipotentials: EquipotentialConfig,
    pub zoom: ZoomConfig,
    pub render: RenderConfig,
}

impl FieldConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FieldConfig = toml::from_str(content).map_err(|e| anyhow!("failed to parse TOML config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if !(MIN_LEVELS..=MAX_LEVELS).contains(&self.equipotentials.levels) {
            return Err(anyhow!(
                "[equipotentials] levels must be within {MIN_LEVELS}..={MAX_LEVELS}, got {}",
                self.equipotentials.levels
            ));
        }
        let z = &self.zoom;
        if z.zoom_out_factor.is_nan() || z.zoom_out_factor <= 1.0 {
            return Err(anyhow!("[zoom] zoom_out_factor must be > 1, got {}", z.zoom_out_factor));
        }
        if z.zoom_in_factor.is_nan() || z.zoom_in_factor <= 0.0 || z.zoom_in_factor >= 1.0 {
            return Err(anyhow!("[zoom] zoom_in_factor must be within (0, 1), got {}", z.zoom_in_factor));
        }
        if z.min_extent.is_nan() || z.min_extent <= 0.0 {
            return Err(anyhow!("[zoom] min_extent must be positive, got {}", z.min_extent));
        }
        self.render.validate()?;
        if self.grid.points > MAX_POINTS_PER_AXIS / 2 {
            tracing::warn!(points = self.grid.points, "large grid, plotting may be slow");
        }
        Ok(())
    }

    /// Plot inputs for `charges_text` with the configured grid and equipotential options.
    pub fn plot_inputs(&self, charges_text: impl Into<String>) -> PlotInputs {
        PlotInputs {
            charges: charges_text.into(),
            grid_min: self.grid.min.to_string(),
            grid_max: self.grid.max.to_string(),
            grid_points: self.grid.points.to_string(),
            show_equipotentials: self.equipotentials.show,
            level_count: self.equipotentials.levels as i64,
        }
    }
}
