//! Factor categories and their status tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named risk/opportunity category shown on a site card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    /// Cooling water proximity
    WaterSource,
    /// General seismic activity (core dataset)
    SeismicActivity,
    /// Fault-line exposure (hazard dataset)
    SeismicHazard,
    /// Flood basin / storm surge exposure
    FloodRisk,
    /// Population within 50 km
    PopulationDensity,
    /// Distance to an existing substation
    GridConnection,
    /// Road, rail and port access
    Infrastructure,
    EnvironmentalImpact,
}

impl FactorKind {
    pub const ALL: [FactorKind; 8] = [
        FactorKind::WaterSource,
        FactorKind::SeismicActivity,
        FactorKind::SeismicHazard,
        FactorKind::FloodRisk,
        FactorKind::PopulationDensity,
        FactorKind::GridConnection,
        FactorKind::Infrastructure,
        FactorKind::EnvironmentalImpact,
    ];

    /// Wire key, matches the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            FactorKind::WaterSource => "waterSource",
            FactorKind::SeismicActivity => "seismicActivity",
            FactorKind::SeismicHazard => "seismicHazard",
            FactorKind::FloodRisk => "floodRisk",
            FactorKind::PopulationDensity => "populationDensity",
            FactorKind::GridConnection => "gridConnection",
            FactorKind::Infrastructure => "infrastructure",
            FactorKind::EnvironmentalImpact => "environmentalImpact",
        }
    }

    /// Row label on the site card
    pub fn label(&self) -> &'static str {
        match self {
            FactorKind::WaterSource => "Water Source Proximity",
            FactorKind::SeismicActivity => "Seismic Activity",
            FactorKind::SeismicHazard => "Seismic Hazard",
            FactorKind::FloodRisk => "Flood Risk",
            FactorKind::PopulationDensity => "Population Density (within 50km)",
            FactorKind::GridConnection => "Grid Connection Access",
            FactorKind::Infrastructure => "Infrastructure & Transport",
            FactorKind::EnvironmentalImpact => "Environmental Impact",
        }
    }

    /// Icon name (lucide set) for the row
    pub fn icon(&self) -> &'static str {
        match self {
            FactorKind::WaterSource => "droplet",
            FactorKind::SeismicActivity | FactorKind::SeismicHazard => "activity",
            FactorKind::FloodRisk => "waves",
            FactorKind::PopulationDensity => "users",
            FactorKind::GridConnection => "zap",
            FactorKind::Infrastructure => "truck",
            FactorKind::EnvironmentalImpact => "leaf",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Three-tier status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Warning,
    Bad,
}

impl FactorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorStatus::Good => "good",
            FactorStatus::Warning => "warning",
            FactorStatus::Bad => "bad",
        }
    }
}

impl fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAssessment {
    pub status: FactorStatus,
    pub detail: String,
}

impl FactorAssessment {
    pub fn new(status: FactorStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn good(detail: impl Into<String>) -> Self {
        Self::new(FactorStatus::Good, detail)
    }

    pub fn warning(detail: impl Into<String>) -> Self {
        Self::new(FactorStatus::Warning, detail)
    }

    pub fn bad(detail: impl Into<String>) -> Self {
        Self::new(FactorStatus::Bad, detail)
    }
}

/// A factor assessment tagged with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFactor {
    pub kind: FactorKind,
    #[serde(flatten)]
    pub assessment: FactorAssessment,
}
