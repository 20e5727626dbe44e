//! The projection model bound to one calibration.

use crate::config::ModelConfig;
use crate::error::HorizonResult;
use crate::format::get_time_remaining_with;
use crate::lever::LeverSet;
use crate::milestone::{generate_milestones, with_singularity, Milestone};
use crate::projection::Projection;
use crate::scenario::{determine_scenario, Scenario};
use crate::timeline::{calculate_timeline_with, Timeline};
use crate::trajectory::{compute_segmented_trajectory_with, compute_trajectory_with, Trajectory};

/// The projection model bound to a calibration.
///
/// The crate-level free functions use [`ModelConfig::default`]; build a
/// `HorizonModel` to run the same operations under another calibration.
/// Holds no state besides the config, so a single instance can be shared
/// freely.
#[derive(Debug, Clone, Default)]
pub struct HorizonModel {
    config: ModelConfig,
}

impl HorizonModel {
    /// Validate `config` and bind it.
    pub fn new(config: ModelConfig) -> HorizonResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn calculate_timeline(&self, levers: &LeverSet) -> Timeline {
        calculate_timeline_with(&self.config, levers)
    }

    pub fn determine_scenario(&self, levers: &LeverSet) -> Scenario {
        determine_scenario(levers)
    }

    pub fn compute_trajectory(&self, timeline: &Timeline) -> Trajectory {
        compute_trajectory_with(&self.config, timeline)
    }

    pub fn compute_segmented_trajectory(&self, timeline: &Timeline) -> Trajectory {
        compute_segmented_trajectory_with(
            &self.config,
            timeline.agi_year,
            timeline.super_year,
            timeline.asi_year,
        )
    }

    /// Canonical milestones plus the Singularity marker.
    pub fn milestones(&self, timeline: &Timeline) -> Vec<Milestone> {
        with_singularity(
            generate_milestones(timeline.agi_year, timeline.super_year, timeline.asi_year),
            &self.config,
        )
    }

    pub fn singularity_year(&self, timeline: &Timeline) -> f64 {
        timeline.singularity_year(&self.config)
    }

    pub fn time_remaining(&self, target_year: f64) -> String {
        get_time_remaining_with(&self.config, target_year)
    }

    /// Run the whole pipeline for one lever set.
    pub fn project(&self, levers: &LeverSet) -> Projection {
        let timeline = self.calculate_timeline(levers);
        Projection {
            scenario: self.determine_scenario(levers),
            singularity_year: self.singularity_year(&timeline),
            trajectory: self.compute_trajectory(&timeline),
            milestones: self.milestones(&timeline),
            timeline,
        }
    }
}
