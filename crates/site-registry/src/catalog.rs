//! Authored site datasets
//!
//! Two variants exist. `core` is the five-city set with
//! seismic-activity and environmental-impact rows. `hazard` extends the city
//! list to eleven and swaps those rows for fault-line and flood-basin exposure.
//!
//! Every table is keyed by city name. A city missing from a factor table gets
//! that table's fallback; a city missing from the score table gets
//! [`DEFAULT_SCORE`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::factors::FactorKind;
use crate::factors::FactorStatus::{self, Bad, Good, Warning};
use crate::RegistryError;

/// Score assigned to names absent from the score table
pub const DEFAULT_SCORE: u8 = 70;

/// Dataset variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Core,
    Hazard,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Core => "core",
            Variant::Hazard => "hazard",
        }
    }

    pub fn dataset(&self) -> &'static Dataset {
        match self {
            Variant::Core => &CORE,
            Variant::Hazard => &HAZARD,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(Variant::Core),
            "hazard" => Ok(Variant::Hazard),
            _ => Err(RegistryError::UnknownVariant(s.to_string())),
        }
    }
}

/// Per-factor lookup table: (city, status, detail) rows plus a fallback
pub struct FactorTable {
    pub kind: FactorKind,
    pub fallback: (FactorStatus, &'static str),
    pub entries: &'static [(&'static str, FactorStatus, &'static str)],
}

/// One complete authored dataset
pub struct Dataset {
    pub variant: Variant,
    /// (name, latitude, longitude) in display order
    pub cities: &'static [(&'static str, f64, f64)],
    pub scores: &'static [(&'static str, u8)],
    /// Factor tables in card row order
    pub factors: &'static [FactorTable],
}

// ============================================================================
// CORE - five cities
// ============================================================================

static CORE: Dataset = Dataset {
    variant: Variant::Core,
    cities: &[
        ("Naypyidaw", 19.7633, 96.0785),
        ("Yangon", 16.8661, 96.1951),
        ("Mandalay", 21.9588, 96.0891),
        ("Bago", 17.3355, 96.4807),
        ("Mawlamyine", 16.4905, 97.6278),
    ],
    scores: &[
        ("Naypyidaw", 72),
        ("Yangon", 65),
        ("Mandalay", 78),
        ("Bago", 68),
        ("Mawlamyine", 70),
    ],
    factors: &[
        FactorTable {
            kind: FactorKind::WaterSource,
            fallback: (Good, "River: 5 km"),
            entries: &[
                ("Naypyidaw", Good, "Ayeyarwady River: 5 km"),
                ("Yangon", Good, "Yangon River: 2 km"),
                ("Mandalay", Good, "Ayeyarwady River: 3 km"),
                ("Bago", Warning, "Bago River: 8 km"),
                ("Mawlamyine", Good, "Thanlwin River: 1 km"),
            ],
        },
        FactorTable {
            kind: FactorKind::SeismicActivity,
            fallback: (Good, "Low Risk Zone"),
            entries: &[],
        },
        FactorTable {
            kind: FactorKind::PopulationDensity,
            fallback: (Good, "Low (<100k)"),
            entries: &[("Yangon", Warning, "Medium (500k)")],
        },
        FactorTable {
            kind: FactorKind::GridConnection,
            fallback: (Good, "Existing Substation: 20 km"),
            entries: &[],
        },
        FactorTable {
            kind: FactorKind::Infrastructure,
            fallback: (Good, "Major Road/Port"),
            entries: &[],
        },
        FactorTable {
            kind: FactorKind::EnvironmentalImpact,
            fallback: (Good, "Minimal Impact"),
            entries: &[],
        },
    ],
};

// ============================================================================
// HAZARD - eleven cities, fault and flood exposure
// ============================================================================

static HAZARD: Dataset = Dataset {
    variant: Variant::Hazard,
    cities: &[
        ("Naypyidaw", 19.7633, 96.0785),
        ("Yangon", 16.8661, 96.1951),
        ("Mandalay", 21.9588, 96.0891),
        ("Bago", 17.3355, 96.4807),
        ("Mawlamyine", 16.4905, 97.6278),
        ("Pathein", 16.7792, 94.7325),
        ("Sittwe", 20.1462, 92.8983),
        ("Taunggyi", 20.7892, 97.0378),
        ("Myitkyina", 25.3833, 97.3958),
        ("Monywa", 22.1086, 95.1358),
        ("Magway", 20.1496, 94.9325),
    ],
    scores: &[
        ("Naypyidaw", 70),
        ("Yangon", 58),
        ("Mandalay", 52),
        ("Bago", 55),
        ("Mawlamyine", 66),
        ("Pathein", 48),
        ("Sittwe", 42),
        ("Taunggyi", 74),
        ("Myitkyina", 50),
        ("Monywa", 71),
        ("Magway", 76),
    ],
    factors: &[
        FactorTable {
            kind: FactorKind::WaterSource,
            fallback: (Good, "River: 5 km"),
            entries: &[
                ("Naypyidaw", Warning, "Sinthay River: 10 km"),
                ("Yangon", Good, "Yangon River: 2 km"),
                ("Mandalay", Good, "Ayeyarwady River: 3 km"),
                ("Bago", Warning, "Bago River: 8 km"),
                ("Mawlamyine", Good, "Thanlwin River: 1 km"),
                ("Pathein", Good, "Pathein River: 1 km"),
                ("Sittwe", Good, "Kaladan River: 2 km"),
                ("Taunggyi", Warning, "Inle Lake: 25 km"),
                ("Myitkyina", Good, "Ayeyarwady River: 1 km"),
                ("Monywa", Good, "Chindwin River: 1 km"),
                ("Magway", Good, "Ayeyarwady River: 2 km"),
            ],
        },
        FactorTable {
            kind: FactorKind::SeismicHazard,
            fallback: (Good, "Low Risk Zone"),
            entries: &[
                ("Naypyidaw", Warning, "Sagaing Fault: 25 km"),
                ("Yangon", Warning, "Sagaing Fault: 45 km"),
                ("Mandalay", Bad, "Sagaing Fault: 10 km"),
                ("Bago", Bad, "Sagaing Fault: 15 km"),
                ("Sittwe", Warning, "Arakan Subduction Zone"),
                ("Taunggyi", Warning, "Kyaukkyan Fault: 20 km"),
                ("Myitkyina", Warning, "Sagaing Fault: 30 km"),
            ],
        },
        FactorTable {
            kind: FactorKind::FloodRisk,
            fallback: (Good, "Low Flood Risk"),
            entries: &[
                ("Yangon", Bad, "Ayeyarwady Delta: High"),
                ("Bago", Warning, "Bago River Floodplain"),
                ("Mawlamyine", Warning, "Thanlwin Estuary: Moderate"),
                ("Pathein", Bad, "Ayeyarwady Delta: Very High"),
                ("Sittwe", Bad, "Coastal Storm Surge"),
                ("Myitkyina", Warning, "Upper Ayeyarwady: Seasonal"),
                ("Magway", Warning, "Ayeyarwady Basin: Moderate"),
            ],
        },
        FactorTable {
            kind: FactorKind::PopulationDensity,
            fallback: (Good, "Low (<100k)"),
            entries: &[
                ("Yangon", Bad, "High (5M+)"),
                ("Mandalay", Warning, "Medium (1.2M)"),
                ("Naypyidaw", Warning, "Medium (900k)"),
                ("Mawlamyine", Warning, "Medium (300k)"),
                ("Bago", Warning, "Medium (250k)"),
            ],
        },
        FactorTable {
            kind: FactorKind::GridConnection,
            fallback: (Good, "Existing Substation: 20 km"),
            entries: &[
                ("Naypyidaw", Good, "National Grid Hub: 5 km"),
                ("Yangon", Good, "Hlawga Substation: 10 km"),
                ("Sittwe", Bad, "Isolated Grid: 150 km"),
                ("Myitkyina", Warning, "Regional Line: 60 km"),
                ("Pathein", Warning, "Regional Line: 40 km"),
            ],
        },
        FactorTable {
            kind: FactorKind::Infrastructure,
            fallback: (Good, "Major Road/Port"),
            entries: &[
                ("Sittwe", Warning, "Port Only, Limited Roads"),
                ("Taunggyi", Warning, "Mountain Roads"),
                ("Myitkyina", Warning, "Rail Terminus, Limited Roads"),
                ("Pathein", Warning, "River Port"),
            ],
        },
    ],
};
