//! Weight table: how many years one lever point moves each milestone.
//!
//! Positive weights accelerate (a positive lever value pulls the milestone
//! earlier); negative weights decelerate.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::lever::LeverId;

/// Sensitivity coefficients of a single lever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub agi: f64,
    pub superintelligence: f64,
    pub asi: f64,
}

impl WeightEntry {
    pub const fn new(agi: f64, superintelligence: f64, asi: f64) -> Self {
        Self {
            agi,
            superintelligence,
            asi,
        }
    }

    /// Multiply every coefficient by `value`.
    pub fn scaled(self, value: f64) -> Self {
        Self {
            agi: self.agi * value,
            superintelligence: self.superintelligence * value,
            asi: self.asi * value,
        }
    }

    pub fn is_accelerating(&self) -> bool {
        self.agi > 0.0 && self.superintelligence > 0.0 && self.asi > 0.0
    }

    pub fn is_decelerating(&self) -> bool {
        self.agi < 0.0 && self.superintelligence < 0.0 && self.asi < 0.0
    }
}

impl Add for WeightEntry {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            agi: self.agi + rhs.agi,
            superintelligence: self.superintelligence + rhs.superintelligence,
            asi: self.asi + rhs.asi,
        }
    }
}

impl LeverId {
    /// Weight triple for this lever.
    pub const fn weights(self) -> WeightEntry {
        match self {
            // Development
            LeverId::AiRnD => WeightEntry::new(0.35, 0.4, 0.45),
            LeverId::ComputeGrowth => WeightEntry::new(0.3, 0.35, 0.4),
            LeverId::Algorithmic => WeightEntry::new(0.45, 0.5, 0.55),
            LeverId::DataAvailability => WeightEntry::new(0.2, 0.25, 0.25),

            // Competition
            LeverId::Geopolitical => WeightEntry::new(0.3, 0.35, 0.35),
            LeverId::Talent => WeightEntry::new(0.2, 0.2, 0.2),
            LeverId::CorporateRace => WeightEntry::new(0.35, 0.4, 0.4),
            LeverId::Energy => WeightEntry::new(0.15, 0.2, 0.25),

            // Safety & governance
            LeverId::Safety => WeightEntry::new(-0.25, -0.3, -0.35),
            LeverId::Alignment => WeightEntry::new(-0.2, -0.35, -0.45),
            LeverId::Regulation => WeightEntry::new(-0.35, -0.4, -0.45),
            LeverId::InternationalCoord => WeightEntry::new(-0.3, -0.35, -0.4),

            // Wildcards
            LeverId::EconomicPressure => WeightEntry::new(0.2, 0.25, 0.25),
            LeverId::PublicSentiment => WeightEntry::new(-0.15, -0.15, -0.15),
            LeverId::BlackSwan => WeightEntry::new(0.5, 0.6, 0.7),
        }
    }
}

/// Look up the weights for a raw LeverSet key. Unknown keys have none.
pub fn weight_for(key: &str) -> Option<WeightEntry> {
    key.parse::<LeverId>().ok().map(LeverId::weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lever_has_a_direction() {
        for id in LeverId::ALL {
            let w = id.weights();
            assert!(
                w.is_accelerating() ^ w.is_decelerating(),
                "{id} has mixed-sign weights"
            );
        }
    }

    #[test]
    fn decelerating_levers() {
        let decelerating: Vec<LeverId> = LeverId::ALL
            .into_iter()
            .filter(|id| id.weights().is_decelerating())
            .collect();
        assert_eq!(
            decelerating,
            vec![
                LeverId::Safety,
                LeverId::Alignment,
                LeverId::Regulation,
                LeverId::InternationalCoord,
                LeverId::PublicSentiment,
            ]
        );
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(
            weight_for("blackSwan"),
            Some(WeightEntry::new(0.5, 0.6, 0.7))
        );
        assert_eq!(weight_for("BlackSwan"), None);
        assert_eq!(weight_for(""), None);
    }

    #[test]
    fn scaled_and_summed() {
        let total = LeverId::AiRnD.weights().scaled(2.0) + LeverId::Safety.weights().scaled(1.0);
        assert!((total.agi - 0.45).abs() < 1e-12);
        assert!((total.superintelligence - 0.5).abs() < 1e-12);
        assert!((total.asi - 0.55).abs() < 1e-12);
    }
}
