//! Timeline calculator.
//!
//! `year = baseline - Σ value · weight`, with each value clamped into its
//! lever's range, then three constraints applied in order (each depends on
//! the previous result):
//!
//! 1. `agi   = max(agi, min_agi_year)`
//! 2. `super = max(super, agi + gap)`
//! 3. `asi   = max(asi, super + gap)`
//!
//! and finally every year is rounded to the nearest tenth.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ModelConfig;
use crate::lever::{LeverId, LeverSet};
use crate::weights::WeightEntry;

/// Three ordered milestone years, at one-decimal precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub agi_year: f64,
    pub super_year: f64,
    pub asi_year: f64,
}

impl Timeline {
    /// Timeline with no lever applied.
    pub fn baseline(config: &ModelConfig) -> Self {
        calculate_timeline_with(config, &LeverSet::new())
    }

    /// Derived singularity year under `config`.
    pub fn singularity_year(&self, config: &ModelConfig) -> f64 {
        self.asi_year + config.singularity_offset_years
    }

    /// Whether the floor and gap guarantees hold.
    pub fn is_well_ordered(&self, config: &ModelConfig) -> bool {
        const TOLERANCE: f64 = 1e-9;
        self.agi_year + TOLERANCE >= config.min_agi_year
            && self.super_year + TOLERANCE >= self.agi_year + config.min_gap_years
            && self.asi_year + TOLERANCE >= self.super_year + config.min_gap_years
    }
}

/// Calculate milestone years with the default calibration.
pub fn calculate_timeline(levers: &LeverSet) -> Timeline {
    calculate_timeline_with(&ModelConfig::default(), levers)
}

/// Calculate milestone years under `config`.
pub fn calculate_timeline_with(config: &ModelConfig, levers: &LeverSet) -> Timeline {
    let mut delta = WeightEntry::default();
    for (key, value) in levers.iter() {
        let Ok(id) = key.parse::<LeverId>() else {
            debug!(lever = key, "ignoring unknown lever");
            continue;
        };
        if !value.is_finite() {
            debug!(lever = key, "ignoring non-finite lever value");
            continue;
        }
        let spec = id.spec();
        if !spec.contains(value) {
            debug!(lever = key, value, "clamping out-of-range lever value");
        }
        delta = delta + id.weights().scaled(spec.clamp(value));
    }

    let baselines = &config.baselines;
    let gap = config.min_gap_years;

    let mut agi = baselines.agi - delta.agi;
    let mut superintelligence = baselines.superintelligence - delta.superintelligence;
    let mut asi = baselines.asi - delta.asi;

    if agi < config.min_agi_year {
        debug!(raw = agi, floor = config.min_agi_year, "AGI floor applied");
        agi = config.min_agi_year;
    }
    if superintelligence < agi + gap {
        debug!(raw = superintelligence, "superintelligence pushed to minimum gap");
        superintelligence = agi + gap;
    }
    if asi < superintelligence + gap {
        debug!(raw = asi, "ASI pushed to minimum gap");
        asi = superintelligence + gap;
    }

    // Gaps are re-checked after rounding so a half-tenth tie can never shave
    // a gap below its minimum. `min_gap_years` is a whole number of tenths.
    let agi_year = round_tenths(agi);
    let super_year = round_tenths(superintelligence).max(round_tenths(agi_year + gap));
    let asi_year = round_tenths(asi).max(round_tenths(super_year + gap));

    Timeline {
        agi_year,
        super_year,
        asi_year,
    }
}

fn round_tenths(year: f64) -> f64 {
    (year * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(entries: &[(&str, f64)]) -> LeverSet {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn empty_set_returns_baselines() {
        let tl = calculate_timeline(&LeverSet::new());
        assert_eq!(
            tl,
            Timeline {
                agi_year: 2027.0,
                super_year: 2035.0,
                asi_year: 2043.0
            }
        );
        assert_eq!(tl, calculate_timeline(&LeverSet::defaults()));
    }

    #[test]
    fn acceleration_subtracts_years() {
        let tl = calculate_timeline(&set(&[("aiRnD", 2.0)]));
        // 2027 - 0.7 sits under the floor, which itself rounds to 2027.0.
        assert_eq!(tl.agi_year, 2027.0);
        assert_eq!(tl.super_year, 2034.2);
        assert_eq!(tl.asi_year, 2042.1);
    }

    #[test]
    fn deceleration_adds_years() {
        let tl = calculate_timeline(&set(&[("regulation", 5.0)]));
        assert_eq!(tl.agi_year, 2028.8);
        assert_eq!(tl.super_year, 2037.0);
        assert_eq!(tl.asi_year, 2045.3);
    }

    #[test]
    fn agi_floor_binds_and_rounds() {
        let tl = calculate_timeline(&set(&[("blackSwan", 5.0), ("algorithmic", 5.0)]));
        // Raw AGI 2027 - 4.75 is far below the floor of 2026.95.
        assert_eq!(tl.agi_year, 2027.0);
        assert!(tl.is_well_ordered(&ModelConfig::default()));
    }

    #[test]
    fn gaps_cascade_when_everything_accelerates() {
        let levers: LeverSet = LeverId::ALL
            .iter()
            .map(|id| {
                let spec = id.spec();
                let v = if id.weights().is_accelerating() {
                    spec.max
                } else {
                    spec.min
                };
                (id.as_str(), v)
            })
            .collect();
        let tl = calculate_timeline(&levers);
        assert_eq!(tl.agi_year, 2027.0);
        assert_eq!(tl.super_year, 2028.0);
        assert_eq!(tl.asi_year, 2029.0);
    }

    #[test]
    fn unknown_and_non_finite_entries_are_ignored() {
        let mut levers = set(&[("warpDrive", 5.0), ("talent", f64::NAN)]);
        levers.insert("energy", f64::INFINITY);
        assert_eq!(
            calculate_timeline(&levers),
            calculate_timeline(&LeverSet::new())
        );
    }

    #[test]
    fn rounds_to_one_decimal() {
        let tl = calculate_timeline(&set(&[("energy", 1.0)]));
        // 2027 - 0.15 = 2026.85 -> floor 2026.95 -> 2027.0
        assert_eq!(tl.agi_year, 2027.0);
        assert_eq!(tl.super_year, 2034.8);
        assert_eq!(tl.asi_year, 2042.8);
        for year in [tl.agi_year, tl.super_year, tl.asi_year] {
            assert!(((year * 10.0).round() - year * 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let levers = set(&[("aiRnD", 3.0), ("safety", -2.0), ("talent", 1.0)]);
        assert_eq!(calculate_timeline(&levers), calculate_timeline(&levers));
    }

    #[test]
    fn custom_gap_is_respected() {
        let config = ModelConfig {
            min_gap_years: 2.5,
            ..Default::default()
        };
        let levers = set(&[
            ("blackSwan", 5.0),
            ("aiRnD", 5.0),
            ("algorithmic", 5.0),
            ("computeGrowth", 5.0),
        ]);
        let tl = calculate_timeline_with(&config, &levers);
        assert!(tl.is_well_ordered(&config));
        assert_eq!(tl.super_year - tl.agi_year, 2.5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(
            calculate_timeline(&set(&[("regulation", 50.0)])),
            calculate_timeline(&set(&[("regulation", 5.0)]))
        );
        assert_eq!(
            calculate_timeline(&set(&[("talent", -1e12)])),
            calculate_timeline(&set(&[("talent", -3.0)]))
        );
    }

    #[test]
    fn huge_finite_values_keep_ordering() {
        let config = ModelConfig::default();
        for value in [-1e19, 1e19, -1e300, 1e300, f64::MAX, f64::MIN] {
            let tl = calculate_timeline(&LeverSet::from_json(&json!({ "aiRnD": value })));
            assert!(tl.is_well_ordered(&config), "{value}: {tl:?}");
            assert!(tl.asi_year < 2100.0, "{value}: {tl:?}");
        }

        let levers: LeverSet = LeverId::ALL.iter().map(|id| (id.as_str(), -1e300)).collect();
        assert!(calculate_timeline(&levers).is_well_ordered(&config));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Timeline::baseline(&ModelConfig::default())).unwrap();
        assert_eq!(json["agiYear"], 2027.0);
        assert_eq!(json["superYear"], 2035.0);
        assert_eq!(json["asiYear"], 2043.0);
    }

    #[test]
    fn singularity_follows_asi() {
        let config = ModelConfig::default();
        assert_eq!(Timeline::baseline(&config).singularity_year(&config), 2046.0);
    }
}
