//! # horizon-core
//!
//! Horizon projection model: maps a set of weighted "lever" values onto
//! three ordered milestone years (AGI, Superintelligence, ASI), classifies
//! the lever mix into a scenario, and derives a capability trajectory with
//! milestone annotations.
//!
//! ## Pipeline
//!
//! - **Lever schema** ([`lever`]): fifteen bounded levers with defaults
//! - **Weight table** ([`weights`]): per-lever sensitivity on each milestone
//! - **Timeline calculator** ([`timeline`]): weighted sum, floor, minimum gaps
//! - **Scenario classifier** ([`scenario`]): threshold rules on aggregate scores
//! - **Trajectory generator** ([`trajectory`]): quadratic takeoff curve, plus a
//!   four-phase segmented variant
//! - **Milestones and formatting** ([`milestone`], [`format`]): display
//!   annotations and human-readable years / durations
//!
//! ## Guarantees
//!
//! Every entry point is pure and infallible. Unknown levers and non-finite
//! values are ignored rather than rejected. After calculation:
//!
//! - `agi_year >= min_agi_year`
//! - `super_year >= agi_year + 1`
//! - `asi_year >= super_year + 1`
//!
//! The model is calibrated to a fixed epoch (late December 2025), not the
//! wall clock.

pub mod config;
pub mod error;
pub mod format;
pub mod lever;
pub mod milestone;
pub mod model;
pub mod projection;
pub mod scale;
pub mod scenario;
pub mod timeline;
pub mod trajectory;
pub mod weights;

pub use config::{BaselineYears, ModelConfig, TrajectoryShape, MIN_STEP_YEARS};
pub use error::{HorizonError, HorizonResult};
pub use format::{format_year, get_time_remaining, INVALID_YEAR, UNKNOWN_REMAINING};
pub use lever::{LeverAssignment, LeverCategory, LeverId, LeverSet, LeverSpec, LEVERS};
pub use milestone::{
    generate_milestones, singularity_milestone, singularity_year, with_singularity, Milestone,
};
pub use model::HorizonModel;
pub use projection::Projection;
pub use scale::{CivilizationBand, CIVILIZATION_SCALE};
pub use scenario::{determine_scenario, Scenario, ScenarioProfile, ScenarioScores};
pub use timeline::{calculate_timeline, Timeline};
pub use trajectory::{
    compute_segmented_trajectory, compute_trajectory, Trajectory, TrajectoryPoint,
    MAX_TRAJECTORY_POINTS,
};
pub use weights::WeightEntry;
