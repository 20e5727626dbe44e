//! Model configuration loading
//!
//! Sources are layered, later ones winning:
//! 1. calibrated defaults
//! 2. the file given by `--config` / `HORIZON_CONFIG` (toml, json or yaml)
//! 3. `HORIZON_*` environment variables, `__` separating nested keys
//!    (`HORIZON_MIN_GAP_YEARS=2`, `HORIZON_BASELINES__AGI=2030`)

use horizon_core::ModelConfig;
use tracing::debug;

use crate::error::CliResult;

/// Load and validate the effective model configuration.
pub fn load(path: Option<&str>) -> CliResult<ModelConfig> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&ModelConfig::default())?);

    if let Some(path) = path {
        debug!(path, "loading model configuration file");
        builder = builder.add_source(config::File::with_name(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("HORIZON")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let model: ModelConfig = builder.build()?.try_deserialize()?;
    model.validate()?;
    Ok(model)
}
