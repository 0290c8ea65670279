//! Nearest-city site resolution
//!
//! A click anywhere on the map is matched to the registered city with the
//! smallest squared distance in raw degrees:
//!
//! ```text
//! d²(city) = (city_lat - click_lat)² + (city_lon - click_lon)²
//! ```
//!
//! Ties go to the earliest-listed city (strict less-than). The resulting
//! assessment carries the winning city's canned data at the clicked position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::factors::{FactorAssessment, FactorKind, SiteFactor};
use crate::registry::{CityRegistry, Location};
use crate::Result;

/// Assessment record for one selected point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAssessment {
    pub latitude: f64,
    pub longitude: f64,
    /// Resolved city name
    pub name: String,
    pub score: u8,
    pub factors: Vec<SiteFactor>,
}

impl SiteAssessment {
    pub fn factor(&self, kind: FactorKind) -> Option<&FactorAssessment> {
        self.factors
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| &f.assessment)
    }
}

/// Result of a nearest-city scan
#[derive(Debug, Clone, Copy)]
pub struct Nearest<'a> {
    pub location: &'a Location,
    /// Position in registry order
    pub index: usize,
    pub distance_sq: f64,
}

pub struct SiteResolver<'a> {
    registry: &'a CityRegistry,
}

impl<'a> SiteResolver<'a> {
    pub fn new(registry: &'a CityRegistry) -> Self {
        Self { registry }
    }

    /// Linear scan for the closest registered city.
    ///
    /// A non-finite click never beats `INFINITY`, so it resolves to the
    /// first city.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Nearest<'a> {
        let locations = self.registry.locations();
        let mut index = 0;
        let mut min_distance = f64::INFINITY;

        for (i, city) in locations.iter().enumerate() {
            let distance = (city.latitude - latitude).powi(2) + (city.longitude - longitude).powi(2);
            if distance < min_distance {
                min_distance = distance;
                index = i;
            }
        }

        Nearest {
            location: &locations[index],
            index,
            distance_sq: min_distance,
        }
    }

    /// Resolve a map click into an assessment at the clicked coordinates
    pub fn resolve(&self, latitude: f64, longitude: f64) -> SiteAssessment {
        self.resolve_with_nearest(latitude, longitude).1
    }

    /// [`resolve`](Self::resolve), also returning the scan result
    pub fn resolve_with_nearest(&self, latitude: f64, longitude: f64) -> (Nearest<'a>, SiteAssessment) {
        let nearest = self.nearest(latitude, longitude);
        debug!(
            "Resolved ({:.4}, {:.4}) -> {} (d²={:.4})",
            latitude, longitude, nearest.location.name, nearest.distance_sq
        );
        let site = self.assess_at(&nearest.location.name, latitude, longitude);
        (nearest, site)
    }

    /// Assessment for a registered city at its own coordinates (marker click)
    pub fn assess_city(&self, name: &str) -> Result<SiteAssessment> {
        let city = self.registry.get(name)?;
        Ok(self.assess_at(&city.name, city.latitude, city.longitude))
    }

    /// Assessment for any name at any position, using fallbacks for unknown names
    pub fn assess_at(&self, name: &str, latitude: f64, longitude: f64) -> SiteAssessment {
        let profile = self.registry.profile(name);
        SiteAssessment {
            latitude,
            longitude,
            name: profile.name,
            score: profile.score,
            factors: profile.factors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Variant, DEFAULT_SCORE};
    use crate::factors::FactorStatus;
    use crate::RegistryError;

    fn core() -> CityRegistry {
        CityRegistry::for_variant(Variant::Core).unwrap()
    }

    #[test]
    fn test_click_on_yangon_core() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);
        let site = resolver.resolve(16.8661, 96.1951);

        assert_eq!(site.name, "Yangon");
        assert_eq!(site.score, 65);
        let water = site.factor(FactorKind::WaterSource).unwrap();
        assert_eq!(water.status, FactorStatus::Good);
        assert_eq!(water.detail, "Yangon River: 2 km");
    }

    #[test]
    fn test_click_on_yangon_hazard() {
        let registry = CityRegistry::for_variant(Variant::Hazard).unwrap();
        let resolver = SiteResolver::new(&registry);
        let site = resolver.resolve(16.8661, 96.1951);

        assert_eq!(site.name, "Yangon");
        assert_eq!(site.score, 58);
        assert_eq!(site.factor(FactorKind::FloodRisk).unwrap().status, FactorStatus::Bad);
    }

    #[test]
    fn test_resolve_keeps_click_position() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);
        let site = resolver.resolve(21.5, 95.7);

        assert_eq!(site.name, "Mandalay");
        assert_eq!(site.latitude, 21.5);
        assert_eq!(site.longitude, 95.7);
    }

    #[test]
    fn test_resolve_with_nearest_matches_resolve() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);
        let (nearest, site) = resolver.resolve_with_nearest(17.3, 96.5);

        assert_eq!(nearest.location.name, "Bago");
        assert_eq!(nearest.index, 3);
        assert_eq!(site.name, nearest.location.name);
        assert_eq!(site, resolver.resolve(17.3, 96.5));
    }

    #[test]
    fn test_far_click_still_resolves() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);

        // Somewhere in the Pacific
        let site = resolver.resolve(-30.0, -150.0);
        assert!(registry.get(&site.name).is_ok());
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let registry = CityRegistry::builder(Variant::Core)
            .location("West", 0.0, -1.0)
            .location("East", 0.0, 1.0)
            .build()
            .unwrap();
        let resolver = SiteResolver::new(&registry);

        let nearest = resolver.nearest(0.0, 0.0);
        assert_eq!(nearest.location.name, "West");
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.distance_sq, 1.0);
    }

    #[test]
    fn test_nan_click_falls_to_first_city() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);
        assert_eq!(resolver.nearest(f64::NAN, 96.0).location.name, "Naypyidaw");
    }

    #[test]
    fn test_marker_assessment_uses_city_position() {
        let registry = core();
        let resolver = SiteResolver::new(&registry);
        let site = resolver.assess_city("Bago").unwrap();

        assert_eq!(site.latitude, 17.3355);
        assert_eq!(site.longitude, 96.4807);
        assert_eq!(site.factor(FactorKind::WaterSource).unwrap().status, FactorStatus::Warning);

        assert_eq!(
            resolver.assess_city("Lashio").unwrap_err(),
            RegistryError::NotFound("Lashio".to_string())
        );
    }

    #[test]
    fn test_synthetic_name_gets_fallback_tuple() {
        let registry = CityRegistry::for_variant(Variant::Hazard).unwrap();
        let resolver = SiteResolver::new(&registry);
        let site = resolver.assess_at("Nowhere", 0.0, 0.0);

        assert_eq!(site.score, DEFAULT_SCORE);
        assert_eq!(site.factors.len(), registry.factor_kinds().count());
        assert!(site.factors.iter().all(|f| f.assessment.status == FactorStatus::Good));
        assert_eq!(site.factor(FactorKind::FloodRisk).unwrap().detail, "Low Flood Risk");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::Variant;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        // The winner's distance is a true minimum, and strictly below every earlier city
        #[test]
        fn fuzz_nearest_is_minimum(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let registry = CityRegistry::for_variant(Variant::Hazard).unwrap();
            let resolver = SiteResolver::new(&registry);
            let nearest = resolver.nearest(lat, lon);

            for (i, city) in registry.locations().iter().enumerate() {
                let d = (city.latitude - lat).powi(2) + (city.longitude - lon).powi(2);
                prop_assert!(nearest.distance_sq <= d);
                if i < nearest.index {
                    prop_assert!(d > nearest.distance_sq, "earlier city {} ties winner", city.name);
                }
            }
        }

        // Resolution always lands on a registered city with its canned score
        #[test]
        fn fuzz_resolve_lands_on_registry(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let registry = CityRegistry::for_variant(Variant::Core).unwrap();
            let resolver = SiteResolver::new(&registry);
            let site = resolver.resolve(lat, lon);

            prop_assert!(registry.get(&site.name).is_ok());
            prop_assert_eq!(site.score, registry.score_for(&site.name));
            prop_assert_eq!(site.latitude, lat);
            prop_assert_eq!(site.longitude, lon);
        }

        // Clicking exactly on a city always resolves to that city
        #[test]
        fn fuzz_exact_hit(idx in 0usize..11) {
            let registry = CityRegistry::for_variant(Variant::Hazard).unwrap();
            let resolver = SiteResolver::new(&registry);
            let city = &registry.locations()[idx];

            let nearest = resolver.nearest(city.latitude, city.longitude);
            prop_assert_eq!(&nearest.location.name, &city.name);
            prop_assert_eq!(nearest.distance_sq, 0.0);
        }
    }
}
