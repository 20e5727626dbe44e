//! Everything a renderer needs for one lever set, in one value.

use serde::Serialize;

use crate::lever::LeverSet;
use crate::milestone::Milestone;
use crate::model::HorizonModel;
use crate::scale::CivilizationBand;
use crate::scenario::Scenario;
use crate::timeline::Timeline;
use crate::trajectory::Trajectory;

/// Output bundle of [`HorizonModel::project`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub timeline: Timeline,
    pub singularity_year: f64,
    pub scenario: Scenario,
    pub trajectory: Trajectory,
    /// AGI, ASI/Superintelligence and Singularity, in that order
    pub milestones: Vec<Milestone>,
}

impl Projection {
    /// Project with the default calibration.
    pub fn compute(levers: &LeverSet) -> Self {
        HorizonModel::default().project(levers)
    }

    /// Where a milestone sits on the curve: the capability of the nearest
    /// sample, and the band that capability falls in.
    pub fn placement(&self, milestone: &Milestone) -> Option<(f64, &'static CivilizationBand)> {
        let capability = self.trajectory.capability_at(milestone.year)?;
        let band = CivilizationBand::for_capability(capability)?;
        Some((capability, band))
    }
}
