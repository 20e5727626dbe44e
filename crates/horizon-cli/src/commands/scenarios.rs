//! Scenario catalogue listing

use horizon_core::{determine_scenario, LeverSet, Scenario};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{colorize_scenario, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct ScenarioView {
    id: Scenario,
    title: &'static str,
    description: &'static str,
    conditions: &'static str,
    presets: LeverSet,
    /// What the classifier makes of the preset itself
    classified_as: Scenario,
}

impl From<Scenario> for ScenarioView {
    fn from(scenario: Scenario) -> Self {
        let profile = scenario.profile();
        let presets = scenario.presets();
        Self {
            id: scenario,
            title: profile.title,
            description: profile.description,
            conditions: profile.conditions,
            classified_as: determine_scenario(&presets),
            presets,
        }
    }
}

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Conditions")]
    conditions: String,
    #[tabled(rename = "Preset classifies as")]
    classified_as: String,
}

/// List the four scenarios
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let views: Vec<ScenarioView> = Scenario::ALL.into_iter().map(ScenarioView::from).collect();
    match format {
        OutputFormat::Json => print_json(&views),
        OutputFormat::Text => {
            let rows = views
                .iter()
                .map(|view| ScenarioRow {
                    id: colorize_scenario(view.id).to_string(),
                    title: view.title.to_string(),
                    conditions: view.conditions.to_string(),
                    classified_as: view.classified_as.to_string(),
                })
                .collect();
            print_table(rows);
            Ok(())
        }
    }
}
