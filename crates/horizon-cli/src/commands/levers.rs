//! Lever schema listing

use horizon_core::{LeverSpec, LEVERS};
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Tabled)]
struct LeverRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Lever")]
    label: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Effect")]
    effect: String,
}

impl From<&LeverSpec> for LeverRow {
    fn from(spec: &LeverSpec) -> Self {
        let effect = if spec.id.weights().is_accelerating() {
            "accelerates"
        } else {
            "delays"
        };
        Self {
            id: spec.id.to_string(),
            label: spec.label.to_string(),
            category: spec.category.label().to_string(),
            range: format!("{} .. {}", spec.min, spec.max),
            default: spec.default.to_string(),
            effect: effect.to_string(),
        }
    }
}

/// List every lever in panel order
pub fn execute(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&LEVERS[..]),
        OutputFormat::Text => {
            print_table(LEVERS.iter().map(LeverRow::from).collect());
            Ok(())
        }
    }
}
