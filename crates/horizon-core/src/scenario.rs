//! Scenario classification.
//!
//! Three aggregate scores are computed from named levers (missing levers
//! count as zero) and matched against fixed thresholds. First match wins:
//!
//! | Priority | Rule                                  | Scenario       |
//! |----------|---------------------------------------|----------------|
//! | 1        | safety >= 10 and race <= 0            | `slowdown`     |
//! | 2        | safety >= 6 and development >= 4      | `utopian`      |
//! | 3        | race >= 6 and safety <= 0             | `uncontrolled` |
//! | -        | otherwise                             | `race`         |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HorizonError;
use crate::lever::{LeverId, LeverSet};

const SLOWDOWN_SAFETY: f64 = 10.0;
const UTOPIAN_SAFETY: f64 = 6.0;
const UTOPIAN_DEVELOPMENT: f64 = 4.0;
const UNCONTROLLED_RACE: f64 = 6.0;

const SAFETY_LEVERS: [LeverId; 4] = [
    LeverId::Safety,
    LeverId::Alignment,
    LeverId::Regulation,
    LeverId::InternationalCoord,
];
const RACE_LEVERS: [LeverId; 2] = [LeverId::Geopolitical, LeverId::CorporateRace];
const DEVELOPMENT_LEVERS: [LeverId; 3] =
    [LeverId::AiRnD, LeverId::ComputeGrowth, LeverId::Algorithmic];

/// Narrative classification of a lever mix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Utopian,
    #[default]
    Race,
    Slowdown,
    Uncontrolled,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Utopian,
        Scenario::Race,
        Scenario::Slowdown,
        Scenario::Uncontrolled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Utopian => "utopian",
            Scenario::Race => "race",
            Scenario::Slowdown => "slowdown",
            Scenario::Uncontrolled => "uncontrolled",
        }
    }

    /// Descriptive metadata and lever presets.
    pub fn profile(&self) -> &'static ScenarioProfile {
        match self {
            Scenario::Utopian => &UTOPIAN,
            Scenario::Race => &RACE,
            Scenario::Slowdown => &SLOWDOWN,
            Scenario::Uncontrolled => &UNCONTROLLED,
        }
    }

    /// The preset lever values for this scenario.
    pub fn presets(&self) -> LeverSet {
        self.profile()
            .presets
            .iter()
            .map(|(id, value)| (id.as_str(), *value))
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| HorizonError::UnknownScenario(s.to_string()))
    }
}

/// Aggregate scores used by the classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScenarioScores {
    pub safety: f64,
    pub race: f64,
    pub development: f64,
}

impl ScenarioScores {
    pub fn from_levers(levers: &LeverSet) -> Self {
        let sum = |ids: &[LeverId]| ids.iter().map(|id| levers.get(*id)).sum::<f64>();
        Self {
            safety: sum(&SAFETY_LEVERS[..]),
            race: sum(&RACE_LEVERS[..]),
            development: sum(&DEVELOPMENT_LEVERS[..]),
        }
    }

    pub fn classify(&self) -> Scenario {
        if self.safety >= SLOWDOWN_SAFETY && self.race <= 0.0 {
            Scenario::Slowdown
        } else if self.safety >= UTOPIAN_SAFETY && self.development >= UTOPIAN_DEVELOPMENT {
            Scenario::Utopian
        } else if self.race >= UNCONTROLLED_RACE && self.safety <= 0.0 {
            Scenario::Uncontrolled
        } else {
            Scenario::Race
        }
    }
}

/// Classify a lever mix.
pub fn determine_scenario(levers: &LeverSet) -> Scenario {
    ScenarioScores::from_levers(levers).classify()
}

/// Static description of a scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioProfile {
    pub scenario: Scenario,
    pub title: &'static str,
    pub description: &'static str,
    pub conditions: &'static str,
    pub presets: [(LeverId, f64); 15],
}

static UTOPIAN: ScenarioProfile = ScenarioProfile {
    scenario: Scenario::Utopian,
    title: "Aligned Flourishing",
    description: "Strong safety focus leads to beneficial superintelligence. Humanity flourishes.",
    conditions: "High safety + alignment + coordination",
    presets: [
        (LeverId::AiRnD, 3.0),
        (LeverId::ComputeGrowth, 2.0),
        (LeverId::Algorithmic, 2.0),
        (LeverId::DataAvailability, 1.0),
        (LeverId::Geopolitical, -2.0),
        (LeverId::Talent, 2.0),
        (LeverId::CorporateRace, 0.0),
        (LeverId::Energy, 2.0),
        (LeverId::Safety, 5.0),
        (LeverId::Alignment, 5.0),
        (LeverId::Regulation, 3.0),
        (LeverId::InternationalCoord, 5.0),
        (LeverId::EconomicPressure, 1.0),
        (LeverId::PublicSentiment, 2.0),
        (LeverId::BlackSwan, 0.0),
    ],
};

static RACE: ScenarioProfile = ScenarioProfile {
    scenario: Scenario::Race,
    title: "Competitive Race",
    description: "US-China competition drives rapid development. Outcome uncertain.",
    conditions: "High competition, moderate safety",
    presets: [
        (LeverId::AiRnD, 4.0),
        (LeverId::ComputeGrowth, 4.0),
        (LeverId::Algorithmic, 3.0),
        (LeverId::DataAvailability, 2.0),
        (LeverId::Geopolitical, 5.0),
        (LeverId::Talent, 2.0),
        (LeverId::CorporateRace, 5.0),
        (LeverId::Energy, 2.0),
        (LeverId::Safety, 1.0),
        (LeverId::Alignment, 0.0),
        (LeverId::Regulation, -2.0),
        (LeverId::InternationalCoord, -3.0),
        (LeverId::EconomicPressure, 3.0),
        (LeverId::PublicSentiment, -1.0),
        (LeverId::BlackSwan, 0.0),
    ],
};

static SLOWDOWN: ScenarioProfile = ScenarioProfile {
    scenario: Scenario::Slowdown,
    title: "Managed Transition",
    description: "International agreements slow development. More time for alignment.",
    conditions: "High regulation + coordination",
    presets: [
        (LeverId::AiRnD, -1.0),
        (LeverId::ComputeGrowth, 0.0),
        (LeverId::Algorithmic, 0.0),
        (LeverId::DataAvailability, 0.0),
        (LeverId::Geopolitical, -3.0),
        (LeverId::Talent, 0.0),
        (LeverId::CorporateRace, -2.0),
        (LeverId::Energy, 0.0),
        (LeverId::Safety, 4.0),
        (LeverId::Alignment, 4.0),
        (LeverId::Regulation, 5.0),
        (LeverId::InternationalCoord, 5.0),
        (LeverId::EconomicPressure, -2.0),
        (LeverId::PublicSentiment, 3.0),
        (LeverId::BlackSwan, 0.0),
    ],
};

static UNCONTROLLED: ScenarioProfile = ScenarioProfile {
    scenario: Scenario::Uncontrolled,
    title: "Uncontrolled Takeoff",
    description: "Rapid development outpaces safety. High variance outcomes.",
    conditions: "High race + low safety",
    presets: [
        (LeverId::AiRnD, 5.0),
        (LeverId::ComputeGrowth, 5.0),
        (LeverId::Algorithmic, 5.0),
        (LeverId::DataAvailability, 3.0),
        (LeverId::Geopolitical, 5.0),
        (LeverId::Talent, 3.0),
        (LeverId::CorporateRace, 5.0),
        (LeverId::Energy, 3.0),
        (LeverId::Safety, -4.0),
        (LeverId::Alignment, -3.0),
        (LeverId::Regulation, -5.0),
        (LeverId::InternationalCoord, -5.0),
        (LeverId::EconomicPressure, 3.0),
        (LeverId::PublicSentiment, -3.0),
        (LeverId::BlackSwan, 2.0),
    ],
};
