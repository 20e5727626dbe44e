//! Capability curve sampling

use clap::Args;
use horizon_core::{CivilizationBand, HorizonModel};
use tabled::Tabled;

use super::LeverArgs;
use crate::error::CliResult;
use crate::output::{band_cell, capability_cell, print_json, print_table, year_cell, OutputFormat};

/// Trajectory arguments
#[derive(Args, Debug, Clone)]
pub struct TrajectoryArgs {
    #[command(flatten)]
    pub levers: LeverArgs,

    /// Use the four-phase segmented curve instead of the quadratic one
    #[arg(long)]
    pub segmented: bool,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Capability")]
    capability: String,
    #[tabled(rename = "Band")]
    band: String,
}

/// Print the sampled capability curve
pub fn execute(args: &TrajectoryArgs, model: &HorizonModel, format: OutputFormat) -> CliResult<()> {
    let timeline = model.calculate_timeline(&args.levers.levers());
    let trajectory = if args.segmented {
        model.compute_segmented_trajectory(&timeline)
    } else {
        model.compute_trajectory(&timeline)
    };

    match format {
        OutputFormat::Json => print_json(&trajectory),
        OutputFormat::Text => {
            let rows = trajectory
                .iter()
                .map(|point| PointRow {
                    year: year_cell(point.x),
                    capability: capability_cell(point.y),
                    band: CivilizationBand::for_capability(point.y)
                        .map(band_cell)
                        .unwrap_or_default(),
                })
                .collect();
            print_table(rows);
            Ok(())
        }
    }
}
