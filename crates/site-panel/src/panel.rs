//! Info Panel State Machine
//!
//! The panel is either hidden or showing exactly one site card:
//!
//! ```text
//!   Hidden ──MapClick / MarkerClick──▶ Showing(card)
//!   Showing(a) ──MapClick / MarkerClick──▶ Showing(b)   (replaces a)
//!   Showing ──Close──▶ Hidden
//! ```
//!
//! A marker click for an unregistered city is rejected and leaves the
//! current state untouched.

use serde::{Deserialize, Serialize};
use site_registry::{CityRegistry, SiteResolver};
use tracing::debug;

use crate::card::SiteCard;
use crate::{PanelError, Result};

/// Input events from the map surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    /// Click on the map background
    MapClick { latitude: f64, longitude: f64 },
    /// Click on a city marker
    MarkerClick { name: String },
    /// Close button
    Close,
}

impl PanelEvent {
    /// Parse a terminal command: `click <lat> <lng>`, `marker <name>`, `close`
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "click" => {
                let mut parts = rest.split_whitespace();
                let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(PanelError::InvalidCommand(line.to_string()));
                };
                let latitude = lat
                    .parse()
                    .map_err(|_| PanelError::InvalidCommand(line.to_string()))?;
                let longitude = lng
                    .parse()
                    .map_err(|_| PanelError::InvalidCommand(line.to_string()))?;
                Ok(PanelEvent::MapClick { latitude, longitude })
            }
            "marker" if !rest.is_empty() => Ok(PanelEvent::MarkerClick {
                name: rest.to_string(),
            }),
            "close" if rest.is_empty() => Ok(PanelEvent::Close),
            _ => Err(PanelError::InvalidCommand(line.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "card", rename_all = "snake_case")]
pub enum PanelState {
    Hidden,
    Showing(SiteCard),
}

pub struct SitePanel<'a> {
    resolver: SiteResolver<'a>,
    smr_model: String,
    state: PanelState,
}

impl<'a> SitePanel<'a> {
    pub fn new(registry: &'a CityRegistry, smr_model: impl Into<String>) -> Self {
        Self {
            resolver: SiteResolver::new(registry),
            smr_model: smr_model.into(),
            state: PanelState::Hidden,
        }
    }

    pub fn apply(&mut self, event: PanelEvent) -> Result<&PanelState> {
        match event {
            PanelEvent::MapClick { latitude, longitude } => {
                let site = self.resolver.resolve(latitude, longitude);
                self.show(SiteCard::from_assessment(&site, &self.smr_model));
            }
            PanelEvent::MarkerClick { name } => {
                let site = self.resolver.assess_city(&name)?;
                self.show(SiteCard::from_assessment(&site, &self.smr_model));
            }
            PanelEvent::Close => {
                if self.state != PanelState::Hidden {
                    debug!("Panel closed");
                }
                self.state = PanelState::Hidden;
            }
        }
        Ok(&self.state)
    }

    pub fn click_map(&mut self, latitude: f64, longitude: f64) -> &PanelState {
        let site = self.resolver.resolve(latitude, longitude);
        self.show(SiteCard::from_assessment(&site, &self.smr_model));
        &self.state
    }

    pub fn click_marker(&mut self, name: &str) -> Result<&PanelState> {
        self.apply(PanelEvent::MarkerClick {
            name: name.to_string(),
        })
    }

    pub fn close(&mut self) {
        self.state = PanelState::Hidden;
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Card currently on screen
    pub fn card(&self) -> Option<&SiteCard> {
        match &self.state {
            PanelState::Showing(card) => Some(card),
            PanelState::Hidden => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PanelState::Showing(_))
    }

    fn show(&mut self, card: SiteCard) {
        debug!("Panel showing {} ({})", card.location_label, card.score);
        self.state = PanelState::Showing(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DEFAULT_SMR_MODEL;
    use site_registry::{RegistryError, Variant};

    fn registry() -> CityRegistry {
        CityRegistry::for_variant(Variant::Core).unwrap()
    }

    #[test]
    fn test_starts_hidden() {
        let registry = registry();
        let panel = SitePanel::new(&registry, DEFAULT_SMR_MODEL);
        assert_eq!(panel.state(), &PanelState::Hidden);
        assert!(panel.card().is_none());
    }

    #[test]
    fn test_open_then_close() {
        let registry = registry();
        let mut panel = SitePanel::new(&registry, DEFAULT_SMR_MODEL);

        panel.click_map(16.8661, 96.1951);
        assert!(panel.is_open());
        assert_eq!(panel.card().unwrap().name, "Yangon");

        panel.apply(PanelEvent::Close).unwrap();
        assert_eq!(panel.state(), &PanelState::Hidden);
    }

    #[test]
    fn test_new_click_replaces_card() {
        let registry = registry();
        let mut panel = SitePanel::new(&registry, DEFAULT_SMR_MODEL);

        panel.click_marker("Mandalay").unwrap();
        let first = panel.card().unwrap().clone();
        assert_eq!(first.score, 78);

        panel.click_map(16.5, 97.6);
        let second = panel.card().unwrap();
        assert_eq!(second.name, "Mawlamyine");
        assert_eq!(second.score, 70);
        assert_eq!(second.rows.len(), first.rows.len());
        assert_eq!(second.latitude, 16.5);
    }

    #[test]
    fn test_unknown_marker_keeps_state() {
        let registry = registry();
        let mut panel = SitePanel::new(&registry, "NuScale VOYGR");

        panel.click_marker("Bago").unwrap();
        let err = panel.click_marker("Lashio").unwrap_err();
        assert!(matches!(err, PanelError::Registry(RegistryError::NotFound(_))));

        let card = panel.card().unwrap();
        assert_eq!(card.name, "Bago");
        assert_eq!(card.smr_model, "NuScale VOYGR");
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let registry = registry();
        let mut panel = SitePanel::new(&registry, DEFAULT_SMR_MODEL);
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            PanelEvent::parse("click 16.8661 96.1951").unwrap(),
            PanelEvent::MapClick { latitude: 16.8661, longitude: 96.1951 }
        );
        assert_eq!(
            PanelEvent::parse("marker Naypyidaw").unwrap(),
            PanelEvent::MarkerClick { name: "Naypyidaw".to_string() }
        );
        assert_eq!(PanelEvent::parse("  close ").unwrap(), PanelEvent::Close);

        assert!(PanelEvent::parse("click 16.8").is_err());
        assert!(PanelEvent::parse("click north east").is_err());
        assert!(PanelEvent::parse("marker").is_err());
        assert!(PanelEvent::parse("zoom 7").is_err());
    }

    #[test]
    fn test_state_serializes_tagged() {
        let registry = registry();
        let mut panel = SitePanel::new(&registry, DEFAULT_SMR_MODEL);

        let hidden = serde_json::to_value(panel.state()).unwrap();
        assert_eq!(hidden["state"], "hidden");

        panel.click_marker("Naypyidaw").unwrap();
        let showing = serde_json::to_value(panel.state()).unwrap();
        assert_eq!(showing["state"], "showing");
        assert_eq!(showing["card"]["score"], 72);
    }
}
