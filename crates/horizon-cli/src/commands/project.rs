//! Full projection for one lever mix

use colored::*;
use horizon_core::{format_year, HorizonModel, LeverSet, Projection};
use serde::Serialize;
use tabled::Tabled;

use super::LeverArgs;
use crate::error::CliResult;
use crate::output::{
    band_cell, capability_cell, colorize_scenario, print_heading, print_json, print_table,
    year_cell, OutputFormat,
};

#[derive(Serialize)]
struct ProjectReport {
    levers: LeverSet,
    #[serde(flatten)]
    projection: Projection,
}

#[derive(Tabled)]
struct MilestoneRow {
    #[tabled(rename = "Milestone")]
    label: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Capability")]
    capability: String,
    #[tabled(rename = "Band")]
    band: String,
}

/// Compute and print a projection
pub fn execute(args: &LeverArgs, model: &HorizonModel, format: OutputFormat) -> CliResult<()> {
    let levers = args.levers();
    let projection = model.project(&levers);

    if format == OutputFormat::Json {
        return print_json(&ProjectReport { levers, projection });
    }

    let profile = projection.scenario.profile();
    print_heading("Scenario");
    println!(
        "  {} - {}",
        colorize_scenario(projection.scenario),
        profile.title
    );
    println!("  {}", profile.description.dimmed());
    println!();

    let timeline = &projection.timeline;
    print_heading("Timeline");
    println!(
        "  AGI {}  ->  Superintelligence {}  ->  ASI {}  ->  Singularity {}",
        year_cell(timeline.agi_year),
        year_cell(timeline.super_year),
        year_cell(timeline.asi_year),
        year_cell(projection.singularity_year),
    );
    println!();

    let rows = projection
        .milestones
        .iter()
        .map(|milestone| {
            let placement = projection.placement(milestone);
            MilestoneRow {
                label: milestone.label.clone(),
                year: year_cell(milestone.year),
                when: format_year(milestone.year),
                remaining: model.time_remaining(milestone.year),
                capability: placement
                    .map(|(capability, _)| capability_cell(capability))
                    .unwrap_or_else(|| "-".to_string()),
                band: placement
                    .map(|(_, band)| band_cell(band))
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();
    print_table(rows);
    Ok(())
}
