//! Civilizational capability scale.
//!
//! Splits the capability axis into six Kardashev-style bands. The `y`
//! ranges are display positions; `k_value` is the nominal Kardashev rating.

use serde::Serialize;

/// One band of the capability axis.
#[derive(Debug, Serialize)]
pub struct CivilizationBand {
    pub id: &'static str,
    pub k_value: f64,
    /// Capability range `[lower, upper)`; the top band includes 1.0
    pub y_range: (f64, f64),
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub energy: &'static str,
}

pub static CIVILIZATION_SCALE: [CivilizationBand; 6] = [
    CivilizationBand {
        id: "type0",
        k_value: 0.73,
        y_range: (0.0, 0.15),
        name: "Type 0",
        subtitle: "Pre-Planetary",
        description: "Current humanity (~0.73 K)",
        color: "#64748b",
        energy: "~10^13 W",
    },
    CivilizationBand {
        id: "preAGI",
        k_value: 0.85,
        y_range: (0.15, 0.30),
        name: "Type 0.85",
        subtitle: "Advanced AI Era",
        description: "Narrow -> Reliable Agents",
        color: "#0ea5e9",
        energy: "~10^14 W",
    },
    CivilizationBand {
        id: "agi",
        k_value: 0.95,
        y_range: (0.30, 0.50),
        name: "Type 0.95",
        subtitle: "AGI Threshold",
        description: "Human-level intelligence",
        color: "#00f0ff",
        energy: "~10^15 W",
    },
    CivilizationBand {
        id: "super",
        k_value: 1.0,
        y_range: (0.50, 0.70),
        name: "Type I",
        subtitle: "Planetary Civilization",
        description: "Superintelligence era",
        color: "#22c55e",
        energy: "10^16 W",
    },
    CivilizationBand {
        id: "asi",
        k_value: 1.5,
        y_range: (0.70, 0.85),
        name: "Type I.5",
        subtitle: "ASI / Singularity",
        description: "Recursive self-improvement",
        color: "#8b5cf6",
        energy: "10^20 W",
    },
    CivilizationBand {
        id: "post",
        k_value: 2.0,
        y_range: (0.85, 1.0),
        name: "Type II+",
        subtitle: "Stellar / Beyond",
        description: "Dyson-sphere civilization",
        color: "#ec4899",
        energy: "10^26 W",
    },
];

impl CivilizationBand {
    /// Band containing `capability`. Values outside `[0, 1]` snap to the
    /// nearest end band; NaN has no band.
    pub fn for_capability(capability: f64) -> Option<&'static CivilizationBand> {
        if capability.is_nan() {
            return None;
        }
        CIVILIZATION_SCALE
            .iter()
            .find(|band| capability < band.y_range.1)
            .or_else(|| CIVILIZATION_SCALE.last())
    }

    /// Vertical midpoint of the band, for axis labels.
    pub fn midpoint(&self) -> f64 {
        (self.y_range.0 + self.y_range.1) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_tile_the_unit_interval() {
        assert_eq!(CIVILIZATION_SCALE[0].y_range.0, 0.0);
        assert_eq!(CIVILIZATION_SCALE[5].y_range.1, 1.0);
        for pair in CIVILIZATION_SCALE.windows(2) {
            assert_eq!(pair[0].y_range.1, pair[1].y_range.0);
            assert!(pair[0].k_value < pair[1].k_value);
        }
    }

    #[test]
    fn lookup_by_capability() {
        let id = |y: f64| CivilizationBand::for_capability(y).map(|b| b.id);
        assert_eq!(id(0.12), Some("type0"));
        assert_eq!(id(0.15), Some("preAGI"));
        assert_eq!(id(0.45), Some("agi"));
        assert_eq!(id(0.65), Some("super"));
        assert_eq!(id(0.85), Some("post"));
        assert_eq!(id(0.99), Some("post"));
        assert_eq!(id(1.0), Some("post"));
        assert_eq!(id(-0.2), Some("type0"));
        assert_eq!(id(f64::NAN), None);
    }

    #[test]
    fn midpoints() {
        assert!((CIVILIZATION_SCALE[2].midpoint() - 0.40).abs() < 1e-12);
    }
}
