use thiserror::Error;

/// Errors raised at the edges of the model.
///
/// The projection entry points never fail; these only surface when parsing
/// user-supplied identifiers or validating a non-default configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HorizonError {
    #[error("unknown lever: {0}")]
    UnknownLever(String),

    #[error("unknown scenario: {0} (expected utopian, race, slowdown or uncontrolled)")]
    UnknownScenario(String),

    #[error("invalid lever assignment '{input}': {reason}")]
    InvalidAssignment { input: String, reason: String },

    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type HorizonResult<T> = Result<T, HorizonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HorizonError::InvalidAssignment {
            input: "aiRnD".into(),
            reason: "expected id=value".into(),
        };
        assert!(err.to_string().contains("'aiRnD'"));
        assert!(err.to_string().contains("expected id=value"));

        let err = HorizonError::InvalidConfig {
            field: "trajectory.step_years",
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: trajectory.step_years must be positive"
        );
    }

    #[test]
    fn unknown_scenario_lists_choices() {
        let err = HorizonError::UnknownScenario("doom".into());
        assert!(err.to_string().contains("doom"));
        assert!(err.to_string().contains("uncontrolled"));
    }
}
