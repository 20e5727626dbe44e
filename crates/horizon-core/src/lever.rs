//! Lever schema and the caller-owned lever value map.
//!
//! A lever is a bounded numeric input representing a real-world factor.
//! Positive values mean "more of this factor"; whether that accelerates or
//! delays the milestones is decided by the weight table, not the schema.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{HorizonError, HorizonResult};

/// Identifier of a known lever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeverId {
    AiRnD,
    ComputeGrowth,
    Algorithmic,
    DataAvailability,
    Geopolitical,
    Talent,
    CorporateRace,
    Energy,
    Safety,
    Alignment,
    Regulation,
    InternationalCoord,
    EconomicPressure,
    PublicSentiment,
    BlackSwan,
}

impl LeverId {
    pub const ALL: [LeverId; 15] = [
        LeverId::AiRnD,
        LeverId::ComputeGrowth,
        LeverId::Algorithmic,
        LeverId::DataAvailability,
        LeverId::Geopolitical,
        LeverId::Talent,
        LeverId::CorporateRace,
        LeverId::Energy,
        LeverId::Safety,
        LeverId::Alignment,
        LeverId::Regulation,
        LeverId::InternationalCoord,
        LeverId::EconomicPressure,
        LeverId::PublicSentiment,
        LeverId::BlackSwan,
    ];

    /// The wire identifier used as the LeverSet key.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeverId::AiRnD => "aiRnD",
            LeverId::ComputeGrowth => "computeGrowth",
            LeverId::Algorithmic => "algorithmic",
            LeverId::DataAvailability => "dataAvailability",
            LeverId::Geopolitical => "geopolitical",
            LeverId::Talent => "talent",
            LeverId::CorporateRace => "corporateRace",
            LeverId::Energy => "energy",
            LeverId::Safety => "safety",
            LeverId::Alignment => "alignment",
            LeverId::Regulation => "regulation",
            LeverId::InternationalCoord => "internationalCoord",
            LeverId::EconomicPressure => "economicPressure",
            LeverId::PublicSentiment => "publicSentiment",
            LeverId::BlackSwan => "blackSwan",
        }
    }

    /// Schema entry for this lever.
    pub fn spec(&self) -> &'static LeverSpec {
        // LEVERS is declared in the same order as ALL.
        &LEVERS[*self as usize]
    }
}

impl fmt::Display for LeverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeverId {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeverId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| HorizonError::UnknownLever(s.to_string()))
    }
}

/// Panel grouping for levers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeverCategory {
    Development,
    Competition,
    Safety,
    Wildcard,
}

impl LeverCategory {
    pub fn label(&self) -> &'static str {
        match self {
            LeverCategory::Development => "Development",
            LeverCategory::Competition => "Competition",
            LeverCategory::Safety => "Safety & Governance",
            LeverCategory::Wildcard => "Wildcards",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LeverCategory::Development => "#00f0ff",
            LeverCategory::Competition => "#f97316",
            LeverCategory::Safety => "#22c55e",
            LeverCategory::Wildcard => "#8b5cf6",
        }
    }
}

/// Static description of one lever.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeverSpec {
    pub id: LeverId,
    pub label: &'static str,
    pub description: &'static str,
    pub category: LeverCategory,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl LeverSpec {
    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

const fn lever(
    id: LeverId,
    label: &'static str,
    description: &'static str,
    category: LeverCategory,
    (min, max): (f64, f64),
) -> LeverSpec {
    LeverSpec {
        id,
        label,
        description,
        category,
        min,
        max,
        default: 0.0,
    }
}

/// The lever schema, in panel order.
pub static LEVERS: [LeverSpec; 15] = [
    lever(
        LeverId::AiRnD,
        "AI R&D Investment",
        "Global funding for AI research",
        LeverCategory::Development,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::ComputeGrowth,
        "Compute Scaling",
        "GPU/TPU advancement rate",
        LeverCategory::Development,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::Algorithmic,
        "Algorithmic Progress",
        "Architecture breakthroughs",
        LeverCategory::Development,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::DataAvailability,
        "Data Availability",
        "Training data quality & scale",
        LeverCategory::Development,
        (-3.0, 3.0),
    ),
    lever(
        LeverId::Geopolitical,
        "Geopolitical Race",
        "US-China competition intensity",
        LeverCategory::Competition,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::Talent,
        "Talent Concentration",
        "Top researcher distribution",
        LeverCategory::Competition,
        (-3.0, 3.0),
    ),
    lever(
        LeverId::CorporateRace,
        "Corporate Competition",
        "Frontier lab race intensity",
        LeverCategory::Competition,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::Energy,
        "Energy Infrastructure",
        "Power & datacenter capacity",
        LeverCategory::Competition,
        (-3.0, 3.0),
    ),
    lever(
        LeverId::Safety,
        "AI Safety Research",
        "Alignment R&D funding",
        LeverCategory::Safety,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::Alignment,
        "Alignment Progress",
        "Technical alignment breakthroughs",
        LeverCategory::Safety,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::Regulation,
        "Government Regulation",
        "Oversight & restrictions",
        LeverCategory::Safety,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::InternationalCoord,
        "International Coordination",
        "Global AI governance treaties",
        LeverCategory::Safety,
        (-5.0, 5.0),
    ),
    lever(
        LeverId::EconomicPressure,
        "Economic Pressure",
        "Market demand for AI",
        LeverCategory::Wildcard,
        (-3.0, 3.0),
    ),
    lever(
        LeverId::PublicSentiment,
        "Public Sentiment",
        "Social acceptance level",
        LeverCategory::Wildcard,
        (-3.0, 3.0),
    ),
    lever(
        LeverId::BlackSwan,
        "Black Swan Events",
        "Unexpected disruptions",
        LeverCategory::Wildcard,
        (-5.0, 5.0),
    ),
];

/// Mapping from lever identifier to value.
///
/// Keys are plain strings so a caller can hand over whatever its UI layer
/// produced; keys outside the schema are carried but contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeverSet(BTreeMap<String, f64>);

impl LeverSet {
    /// An empty set: every lever reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every schema lever at its default value.
    pub fn defaults() -> Self {
        LEVERS
            .iter()
            .map(|spec| (spec.id.as_str(), spec.default))
            .collect()
    }

    /// Build a set from untyped JSON.
    ///
    /// A non-object payload becomes an empty set; entries that are not
    /// finite numbers are dropped.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(map) = value else {
            warn!(kind = json_kind(value), "lever payload is not an object, using empty set");
            return Self::new();
        };

        let mut set = Self::new();
        for (key, raw) in map {
            match raw.as_f64().filter(|v| v.is_finite()) {
                Some(v) => {
                    set.0.insert(key.clone(), v);
                }
                None => debug!(lever = key.as_str(), "dropping non-numeric lever value"),
            }
        }
        set
    }

    /// Value of a schema lever, zero when missing or non-finite.
    pub fn get(&self, id: LeverId) -> f64 {
        self.value(id.as_str())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Raw value stored under `key`.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Set a schema lever, clamped into its range. Returns the stored value.
    ///
    /// Non-finite input leaves the current value untouched.
    pub fn set(&mut self, id: LeverId, value: f64) -> f64 {
        if !value.is_finite() {
            debug!(lever = id.as_str(), "ignoring non-finite lever update");
            return self.get(id);
        }
        let clamped = id.spec().clamp(value);
        self.0.insert(id.as_str().to_string(), clamped);
        clamped
    }

    /// Insert an arbitrary key without schema checks.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn apply(&mut self, assignment: &LeverAssignment) -> f64 {
        self.set(assignment.id, assignment.value)
    }

    /// Restore schema defaults and drop everything else.
    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for LeverSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed `id=value` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeverAssignment {
    pub id: LeverId,
    pub value: f64,
}

impl FromStr for LeverAssignment {
    type Err = HorizonError;

    fn from_str(s: &str) -> HorizonResult<Self> {
        let invalid = |reason: &str| HorizonError::InvalidAssignment {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (id, value) = s.split_once('=').ok_or_else(|| invalid("expected id=value"))?;
        let id: LeverId = id.trim().parse()?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| invalid("value is not a number"))?;
        if !value.is_finite() {
            return Err(invalid("value must be finite"));
        }
        Ok(Self { id, value })
    }
}
