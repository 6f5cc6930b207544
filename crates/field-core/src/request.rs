// File: crates/field-core/src/request.rs
// Summary: Raw plot inputs as entered by the user and their validated form.

use crate::charge::ChargeSet;
use crate::error::ValidationError;
use crate::grid::GridSpec;
use crate::levels::{check_level_count, DEFAULT_LEVELS};

/// Text fields and toggles exactly as a UI collects them.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotInputs {
    pub charges: String,
    pub grid_min: String,
    pub grid_max: String,
    pub grid_points: String,
    pub show_equipotentials: bool,
    pub level_count: i64,
}

impl Default for PlotInputs {
    fn default() -> Self {
        Self {
            charges: String::new(),
            grid_min: "-10".into(),
            grid_max: "10".into(),
            grid_points: "200".into(),
            show_equipotentials: true,
            level_count: DEFAULT_LEVELS as i64,
        }
    }
}

impl PlotInputs {
    pub fn with_charges(charges: impl Into<String>) -> Self {
        Self { charges: charges.into(), ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipotentialOptions {
    pub show: bool,
    pub level_count: usize,
}

impl Default for EquipotentialOptions {
    fn default() -> Self {
        Self { show: true, level_count: DEFAULT_LEVELS }
    }
}

/// Everything a plot needs, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRequest {
    pub charges: ChargeSet,
    pub grid: GridSpec,
    pub equipotentials: EquipotentialOptions,
}

impl PlotRequest {
    /// Validate in input order: charges, then grid, then level count. The first
    /// failure is returned.
    pub fn parse(inputs: &PlotInputs) -> Result<Self, ValidationError> {
        let charges = ChargeSet::parse(&inputs.charges)?;
        let grid = GridSpec::parse(&inputs.grid_min, &inputs.grid_max, &inputs.grid_points)?;
        let level_count = check_level_count(inputs.level_count)?;
        Ok(Self {
            charges,
            grid,
            equipotentials: EquipotentialOptions { show: inputs.show_equipotentials, level_count },
        })
    }
}
