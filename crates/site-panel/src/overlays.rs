//! Hazard overlays
//!
//! Static fault-line polylines and flood-basin polygons drawn over the map
//! with an informational popup. Paths are authored as (lat, lng) and exported
//! as GeoJSON, which uses [lng, lat] positions.

use geojson::{Feature, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub use geojson::FeatureCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    FaultLine,
    FloodBasin,
}

impl OverlayKind {
    /// Stroke colour used by the map page
    pub fn color(&self) -> &'static str {
        match self {
            OverlayKind::FaultLine => "#dc2626",
            OverlayKind::FloodBasin => "#2563eb",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HazardOverlay {
    pub name: &'static str,
    pub kind: OverlayKind,
    /// Short risk note, also listed in the sidebar
    pub risk: &'static str,
    pub description: &'static str,
    /// (lat, lng) vertices. Polygons are closed on export.
    pub path: &'static [(f64, f64)],
}

static OVERLAYS: [HazardOverlay; 4] = [
    HazardOverlay {
        name: "Sagaing Fault",
        kind: OverlayKind::FaultLine,
        risk: "Major seismic risk",
        description: "Right-lateral strike-slip fault running north-south through central Myanmar. Source of the M7.7 2025 Mandalay earthquake.",
        path: &[
            (25.90, 96.65),
            (24.60, 96.20),
            (23.30, 95.95),
            (21.95, 95.98),
            (20.90, 96.05),
            (19.70, 96.20),
            (18.40, 96.40),
            (17.40, 96.55),
            (16.60, 96.70),
        ],
    },
    HazardOverlay {
        name: "Kyaukkyan Fault",
        kind: OverlayKind::FaultLine,
        risk: "Moderate seismic risk",
        description: "Fault along the western edge of the Shan Plateau. Produced the 1912 Maymyo earthquake.",
        path: &[
            (23.60, 97.05),
            (22.60, 96.75),
            (21.60, 96.80),
            (20.60, 96.95),
            (19.80, 97.00),
        ],
    },
    HazardOverlay {
        name: "Ayeyarwady Basin",
        kind: OverlayKind::FloodBasin,
        risk: "Flood prone area",
        description: "Central Ayeyarwady floodplain subject to monsoon river flooding.",
        path: &[
            (21.50, 94.70),
            (21.50, 95.60),
            (19.00, 95.50),
            (18.00, 95.30),
            (18.00, 94.70),
            (19.50, 94.60),
        ],
    },
    HazardOverlay {
        name: "Ayeyarwady Delta",
        kind: OverlayKind::FloodBasin,
        risk: "High flood risk",
        description: "Low-lying delta exposed to cyclone storm surge and seasonal inundation.",
        path: &[
            (17.80, 94.60),
            (17.60, 95.90),
            (16.70, 96.40),
            (15.80, 95.80),
            (15.70, 94.40),
            (16.80, 94.20),
        ],
    },
];

pub fn hazard_overlays() -> &'static [HazardOverlay] {
    &OVERLAYS
}

impl HazardOverlay {
    pub fn geometry(&self) -> Geometry {
        let mut coords: Vec<Vec<f64>> = self.path.iter().map(|&(lat, lng)| vec![lng, lat]).collect();

        let value = match self.kind {
            OverlayKind::FaultLine => Value::LineString(coords),
            OverlayKind::FloodBasin => {
                if let Some(first) = coords.first().cloned() {
                    if coords.last() != Some(&first) {
                        coords.push(first);
                    }
                }
                Value::Polygon(vec![coords])
            }
        };

        Geometry::new(value)
    }

    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!(self.name));
        properties.insert("kind".to_string(), json!(self.kind));
        properties.insert("risk".to_string(), json!(self.risk));
        properties.insert("description".to_string(), json!(self.description));
        properties.insert("color".to_string(), json!(self.kind.color()));

        Feature {
            bbox: None,
            geometry: Some(self.geometry()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Export overlays as a GeoJSON FeatureCollection
pub fn to_geojson(overlays: &[HazardOverlay]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: overlays.iter().map(HazardOverlay::to_feature).collect(),
        foreign_members: None,
    }
}
