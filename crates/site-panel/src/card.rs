//! Site card view model
//!
//! Flattens a [`SiteAssessment`] into what the info panel draws: a score
//! title, a suitability badge, one row per factor in registry order, and a
//! footer with the SMR model and resolved location.

use serde::{Deserialize, Serialize};
use site_registry::{FactorKind, FactorStatus, SiteAssessment};
use std::fmt;

use crate::suitability::{Suitability, Tone};

pub const DEFAULT_SMR_MODEL: &str = "Pressurized Water SMR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub suitability: Suitability,
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn for_score(score: u8) -> Self {
        let suitability = Suitability::from_score(score);
        Self {
            suitability,
            label: suitability.label().to_string(),
            tone: suitability.tone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    pub kind: FactorKind,
    pub icon: String,
    pub label: String,
    pub detail: String,
    pub status: FactorStatus,
    /// Status icon name (lucide set)
    pub glyph: String,
    pub tone: Tone,
}

impl FactorRow {
    fn symbol(&self) -> &'static str {
        match self.status {
            FactorStatus::Good => "✓",
            FactorStatus::Warning => "!",
            FactorStatus::Bad => "✗",
        }
    }
}

/// Status icon name and colour role for a factor status
pub fn status_glyph(status: FactorStatus) -> (&'static str, Tone) {
    match status {
        FactorStatus::Good => ("check-circle", Tone::Success),
        FactorStatus::Warning => ("alert-circle", Tone::Warning),
        FactorStatus::Bad => ("x-circle", Tone::Destructive),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCard {
    pub title: String,
    pub name: String,
    pub score: u8,
    pub badge: Badge,
    pub rows: Vec<FactorRow>,
    pub smr_model: String,
    pub location_label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteCard {
    pub fn from_assessment(site: &SiteAssessment, smr_model: &str) -> Self {
        let rows = site
            .factors
            .iter()
            .map(|f| {
                let (glyph, tone) = status_glyph(f.assessment.status);
                FactorRow {
                    kind: f.kind,
                    icon: f.kind.icon().to_string(),
                    label: f.kind.label().to_string(),
                    detail: f.assessment.detail.clone(),
                    status: f.assessment.status,
                    glyph: glyph.to_string(),
                    tone,
                }
            })
            .collect();

        Self {
            title: format!("Site Suitability Score: {}/100", site.score),
            name: site.name.clone(),
            score: site.score,
            badge: Badge::for_score(site.score),
            rows,
            smr_model: smr_model.to_string(),
            location_label: format!("Near {}", site.name),
            latitude: site.latitude,
            longitude: site.longitude,
        }
    }
}

impl fmt::Display for SiteCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  [{}]", self.title, self.badge.label)?;
        writeln!(f, "{}", "-".repeat(60))?;
        for row in &self.rows {
            writeln!(f, " {} {:34} {}", row.symbol(), row.label, row.detail)?;
        }
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "SMR Model: {}", self.smr_model)?;
        write!(
            f,
            "Location: {} ({:.4}, {:.4})",
            self.location_label, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_registry::{CityRegistry, SiteResolver, Variant};

    fn yangon_card() -> SiteCard {
        let registry = CityRegistry::for_variant(Variant::Core).unwrap();
        let site = SiteResolver::new(&registry).assess_city("Yangon").unwrap();
        SiteCard::from_assessment(&site, DEFAULT_SMR_MODEL)
    }

    #[test]
    fn test_card_header_and_footer() {
        let card = yangon_card();
        assert_eq!(card.title, "Site Suitability Score: 65/100");
        assert_eq!(card.badge.label, "Medium");
        assert_eq!(card.badge.tone, Tone::Warning);
        assert_eq!(card.location_label, "Near Yangon");
        assert_eq!(card.smr_model, "Pressurized Water SMR");
    }

    #[test]
    fn test_rows_follow_registry_order() {
        let card = yangon_card();
        let labels: Vec<&str> = card.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Water Source Proximity",
                "Seismic Activity",
                "Population Density (within 50km)",
                "Grid Connection Access",
                "Infrastructure & Transport",
                "Environmental Impact",
            ]
        );

        let population = &card.rows[2];
        assert_eq!(population.status, FactorStatus::Warning);
        assert_eq!(population.glyph, "alert-circle");
        assert_eq!(population.icon, "users");
    }

    #[test]
    fn test_status_glyphs() {
        assert_eq!(status_glyph(FactorStatus::Good), ("check-circle", Tone::Success));
        assert_eq!(status_glyph(FactorStatus::Warning), ("alert-circle", Tone::Warning));
        assert_eq!(status_glyph(FactorStatus::Bad), ("x-circle", Tone::Destructive));
    }

    #[test]
    fn test_text_render() {
        let text = yangon_card().to_string();
        assert!(text.starts_with("Site Suitability Score: 65/100  [Medium]"));
        assert!(text.contains("Yangon River: 2 km"));
        assert!(text.ends_with("Location: Near Yangon (16.8661, 96.1951)"));
    }
}
