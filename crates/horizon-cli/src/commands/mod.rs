//! CLI subcommands

pub mod levers;
pub mod project;
pub mod scenarios;
pub mod settings;
pub mod trajectory;

use clap::Args;
use horizon_core::{LeverAssignment, LeverSet, Scenario};
use tracing::warn;

/// Lever selection shared by the projection commands
#[derive(Args, Debug, Clone)]
pub struct LeverArgs {
    /// Scenario preset to start from (utopian, race, slowdown, uncontrolled)
    #[arg(short, long, default_value_t = Scenario::Race)]
    pub scenario: Scenario,

    /// Override one lever, e.g. `--set aiRnD=3`; repeatable, clamped to range
    #[arg(long = "set", value_name = "ID=VALUE")]
    pub assignments: Vec<LeverAssignment>,
}

impl LeverArgs {
    /// Preset values with the overrides applied in order.
    pub fn levers(&self) -> LeverSet {
        let mut levers = self.scenario.presets();
        for assignment in &self.assignments {
            let stored = levers.apply(assignment);
            if stored != assignment.value {
                warn!(
                    lever = assignment.id.as_str(),
                    requested = assignment.value,
                    stored,
                    "lever value clamped to range"
                );
            }
        }
        levers
    }
}
