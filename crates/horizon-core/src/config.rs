//! Model calibration.
//!
//! The defaults reproduce the hand-authored calibration: baselines of
//! 2027 / 2035 / 2043, an epoch of late December 2025 and an AGI floor one
//! year later.

use serde::{Deserialize, Serialize};

use crate::error::{HorizonError, HorizonResult};

/// Smallest accepted trajectory sampling interval, in years.
pub const MIN_STEP_YEARS: f64 = 0.01;

/// Full calibration of the projection model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Milestone years with every lever at zero
    #[serde(default)]
    pub baselines: BaselineYears,

    /// The fixed "now" of the model (fractional year)
    #[serde(default = "default_current_year")]
    pub current_year: f64,

    /// AGI can never be projected earlier than this
    #[serde(default = "default_min_agi_year")]
    pub min_agi_year: f64,

    /// Minimum spacing between consecutive milestones, in years
    #[serde(default = "default_min_gap_years")]
    pub min_gap_years: f64,

    /// Singularity = ASI + this offset
    #[serde(default = "default_singularity_offset")]
    pub singularity_offset_years: f64,

    /// Shape of the quadratic trajectory
    #[serde(default)]
    pub trajectory: TrajectoryShape,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            baselines: BaselineYears::default(),
            current_year: default_current_year(),
            min_agi_year: default_min_agi_year(),
            min_gap_years: default_min_gap_years(),
            singularity_offset_years: default_singularity_offset(),
            trajectory: TrajectoryShape::default(),
        }
    }
}

/// Milestone years before any lever is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineYears {
    #[serde(default = "default_agi_baseline")]
    pub agi: f64,
    #[serde(default = "default_super_baseline")]
    pub superintelligence: f64,
    #[serde(default = "default_asi_baseline")]
    pub asi: f64,
}

impl Default for BaselineYears {
    fn default() -> Self {
        Self {
            agi: default_agi_baseline(),
            superintelligence: default_super_baseline(),
            asi: default_asi_baseline(),
        }
    }
}

/// Quadratic trajectory parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryShape {
    /// Capability at the epoch
    #[serde(default = "default_start_capability")]
    pub start_capability: f64,

    /// Capability reached at the singularity year
    #[serde(default = "default_end_capability")]
    pub end_capability: f64,

    /// Hard ceiling, kept strictly below 1.0
    #[serde(default = "default_capability_cap")]
    pub capability_cap: f64,

    /// Sampling interval in years
    #[serde(default = "default_step_years")]
    pub step_years: f64,
}

impl Default for TrajectoryShape {
    fn default() -> Self {
        Self {
            start_capability: default_start_capability(),
            end_capability: default_end_capability(),
            capability_cap: default_capability_cap(),
            step_years: default_step_years(),
        }
    }
}

impl ModelConfig {
    /// Reject calibrations that would break the ordering guarantees.
    pub fn validate(&self) -> HorizonResult<()> {
        let finite = [
            ("baselines.agi", self.baselines.agi),
            ("baselines.superintelligence", self.baselines.superintelligence),
            ("baselines.asi", self.baselines.asi),
            ("current_year", self.current_year),
            ("min_agi_year", self.min_agi_year),
            ("min_gap_years", self.min_gap_years),
            ("singularity_offset_years", self.singularity_offset_years),
            ("trajectory.start_capability", self.trajectory.start_capability),
            ("trajectory.end_capability", self.trajectory.end_capability),
            ("trajectory.capability_cap", self.trajectory.capability_cap),
            ("trajectory.step_years", self.trajectory.step_years),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.baselines.agi > self.baselines.superintelligence
            || self.baselines.superintelligence > self.baselines.asi
        {
            return Err(invalid(
                "baselines",
                "must be ordered agi <= superintelligence <= asi".into(),
            ));
        }
        if self.min_agi_year <= self.current_year {
            return Err(invalid(
                "min_agi_year",
                format!("must be after current_year {}", self.current_year),
            ));
        }
        if self.min_gap_years < 0.0 {
            return Err(invalid("min_gap_years", "must not be negative".into()));
        }
        let gap_tenths = self.min_gap_years * 10.0;
        if (gap_tenths - gap_tenths.round()).abs() > 1e-9 {
            return Err(invalid(
                "min_gap_years",
                format!("must be a whole number of tenths, got {}", self.min_gap_years),
            ));
        }
        if self.singularity_offset_years < 0.0 {
            return Err(invalid(
                "singularity_offset_years",
                "must not be negative".into(),
            ));
        }

        let shape = &self.trajectory;
        if shape.step_years < MIN_STEP_YEARS {
            return Err(invalid(
                "trajectory.step_years",
                format!("must be at least {MIN_STEP_YEARS}"),
            ));
        }
        if !(0.0..1.0).contains(&shape.capability_cap) {
            return Err(invalid(
                "trajectory.capability_cap",
                "must lie in [0, 1)".into(),
            ));
        }
        if shape.start_capability < 0.0 || shape.start_capability > shape.end_capability {
            return Err(invalid(
                "trajectory.start_capability",
                "must lie in [0, end_capability]".into(),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> HorizonError {
    HorizonError::InvalidConfig { field, reason }
}

// Default value helpers
fn default_agi_baseline() -> f64 {
    2027.0
}

fn default_super_baseline() -> f64 {
    2035.0
}

fn default_asi_baseline() -> f64 {
    2043.0
}

fn default_current_year() -> f64 {
    2025.95
}

fn default_min_agi_year() -> f64 {
    2026.95
}

fn default_min_gap_years() -> f64 {
    1.0
}

fn default_singularity_offset() -> f64 {
    3.0
}

fn default_start_capability() -> f64 {
    0.12
}

fn default_end_capability() -> f64 {
    0.95
}

fn default_capability_cap() -> f64 {
    0.99
}

fn default_step_years() -> f64 {
    0.3
}
