//! Effective configuration display

use horizon_core::ModelConfig;

use crate::error::CliResult;
use crate::output::{print_heading, print_json, OutputFormat};

/// Print the configuration the model runs with
pub fn execute(config: &ModelConfig, source: Option<&str>, format: OutputFormat) -> CliResult<()> {
    if format == OutputFormat::Json {
        return print_json(config);
    }

    print_heading("Model configuration");
    println!("  Source:            {}", source.unwrap_or("defaults + environment"));
    println!(
        "  Baselines:         AGI {} / Super {} / ASI {}",
        config.baselines.agi, config.baselines.superintelligence, config.baselines.asi
    );
    println!("  Current year:      {}", config.current_year);
    println!("  Earliest AGI:      {}", config.min_agi_year);
    println!("  Minimum gap:       {} years", config.min_gap_years);
    println!("  Singularity after: {} years", config.singularity_offset_years);

    let shape = &config.trajectory;
    println!(
        "  Trajectory:        {} -> {} (cap {}), step {} years",
        shape.start_capability, shape.end_capability, shape.capability_cap, shape.step_years
    );
    Ok(())
}
