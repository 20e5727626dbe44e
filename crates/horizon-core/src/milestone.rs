//! Display milestones derived from the timeline.
//!
//! ASI and Superintelligence are modelled as the same event, so the
//! canonical set holds two markers: AGI and ASI/Superintelligence. The
//! Singularity marker is derived from ASI and appended by the caller.

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;

pub const AGI_LABEL: &str = "AGI";
pub const ASI_LABEL: &str = "ASI/Superintelligence";
pub const SINGULARITY_LABEL: &str = "Singularity";

const AGI_LEVEL: f64 = 0.45;
const ASI_LEVEL: f64 = 0.85;
const AGI_COLOR: &str = "#00f0ff";
const ASI_COLOR: &str = "#ec4899";
const SINGULARITY_COLOR: &str = "#ec4899";

/// A labelled annotation on the capability curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: f64,
    pub label: String,
    pub color: String,
    /// Nominal capability level, when the milestone has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
}

/// Canonical milestones for a timeline.
///
/// `super_year` is accepted for call-site symmetry with the timeline but
/// does not produce a marker. Any non-finite argument yields no milestones.
pub fn generate_milestones(agi_year: f64, super_year: f64, asi_year: f64) -> Vec<Milestone> {
    if ![agi_year, super_year, asi_year].iter().all(|y| y.is_finite()) {
        return Vec::new();
    }

    vec![
        Milestone {
            year: agi_year,
            label: AGI_LABEL.into(),
            color: AGI_COLOR.into(),
            level: Some(AGI_LEVEL),
        },
        Milestone {
            year: asi_year,
            label: ASI_LABEL.into(),
            color: ASI_COLOR.into(),
            level: Some(ASI_LEVEL),
        },
    ]
}

/// Singularity year with the default offset.
pub fn singularity_year(asi_year: f64) -> f64 {
    asi_year + ModelConfig::default().singularity_offset_years
}

/// The derived Singularity marker. It carries no nominal level; renderers
/// place it on the curve instead.
pub fn singularity_milestone(asi_year: f64) -> Milestone {
    Milestone {
        year: singularity_year(asi_year),
        label: SINGULARITY_LABEL.into(),
        color: SINGULARITY_COLOR.into(),
        level: None,
    }
}

/// Append the Singularity marker derived from the ASI milestone, if present.
pub fn with_singularity(mut milestones: Vec<Milestone>, config: &ModelConfig) -> Vec<Milestone> {
    let asi = milestones
        .iter()
        .find(|m| m.label == ASI_LABEL)
        .map(|m| m.year);
    if let Some(asi_year) = asi {
        milestones.push(Milestone {
            year: asi_year + config.singularity_offset_years,
            ..singularity_milestone(asi_year)
        });
    }
    milestones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_canonical_milestones() {
        let milestones = generate_milestones(2027.0, 2035.0, 2043.0);
        assert_eq!(milestones.len(), 2);

        assert_eq!(milestones[0].label, "AGI");
        assert_eq!(milestones[0].year, 2027.0);
        assert_eq!(milestones[0].level, Some(0.45));
        assert_eq!(milestones[0].color, "#00f0ff");

        assert_eq!(milestones[1].label, "ASI/Superintelligence");
        assert_eq!(milestones[1].year, 2043.0);
        assert_eq!(milestones[1].level, Some(0.85));
    }

    #[test]
    fn super_year_does_not_affect_output() {
        assert_eq!(
            generate_milestones(2027.0, 2030.0, 2043.0),
            generate_milestones(2027.0, 2040.0, 2043.0)
        );
    }

    #[test]
    fn non_finite_input_yields_nothing() {
        assert!(generate_milestones(f64::NAN, 2035.0, 2043.0).is_empty());
        assert!(generate_milestones(2027.0, f64::NAN, 2043.0).is_empty());
        assert!(generate_milestones(2027.0, 2035.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn singularity_is_three_years_after_asi() {
        assert_eq!(singularity_year(2043.0), 2046.0);
        let m = singularity_milestone(2043.0);
        assert_eq!(m.year, 2046.0);
        assert_eq!(m.label, "Singularity");
        assert_eq!(m.level, None);
    }

    #[test]
    fn with_singularity_appends_marker() {
        let config = ModelConfig::default();
        let all = with_singularity(generate_milestones(2027.0, 2035.0, 2043.0), &config);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].label, SINGULARITY_LABEL);
        assert_eq!(all[2].year, 2046.0);

        assert!(with_singularity(Vec::new(), &config).is_empty());
    }

    #[test]
    fn with_singularity_honours_offset() {
        let config = ModelConfig {
            singularity_offset_years: 5.0,
            ..Default::default()
        };
        let all = with_singularity(generate_milestones(2027.0, 2035.0, 2043.0), &config);
        assert_eq!(all[2].year, 2048.0);
    }

    #[test]
    fn level_omitted_from_json_when_absent() {
        let json = serde_json::to_value(singularity_milestone(2043.0)).unwrap();
        assert!(json.get("level").is_none());
        let json = serde_json::to_value(&generate_milestones(2027.0, 2035.0, 2043.0)[0]).unwrap();
        assert_eq!(json["level"], 0.45);
    }
}
