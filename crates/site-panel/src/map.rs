//! Initial map view and city markers

use serde::{Deserialize, Serialize};
use site_registry::{CityRegistry, Location};

/// Initial map center over Myanmar (lat, lng)
pub const MAP_CENTER: [f64; 2] = [21.9162, 95.9560];
pub const MAP_ZOOM: u8 = 6;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub variant: String,
    pub markers: Vec<Location>,
}

impl MapView {
    pub fn for_registry(registry: &CityRegistry) -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            tile_url: TILE_URL.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
            variant: registry.variant().to_string(),
            markers: registry.locations().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_registry::Variant;

    #[test]
    fn test_one_marker_per_city() {
        let registry = CityRegistry::for_variant(Variant::Hazard).unwrap();
        let view = MapView::for_registry(&registry);

        assert_eq!(view.markers.len(), registry.len());
        assert_eq!(view.markers[1].name, "Yangon");
        assert_eq!(view.zoom, 6);
        assert_eq!(view.variant, "hazard");
    }
}
