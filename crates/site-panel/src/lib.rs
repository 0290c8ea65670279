//! Site Panel Library
//!
//! Presentation model for the SMR Site Scout map:
//!
//! | Module | Role |
//! |--------|------|
//! | [`suitability`] | High / Medium / Low tier from a score |
//! | [`card`] | Site card view model (badge, factor rows, footer) |
//! | [`panel`] | Info panel state machine (`Hidden` / `Showing`) |
//! | [`map`] | Initial map view and city markers |
//! | [`overlays`] | Fault-line and flood-basin overlays as GeoJSON |
//! | [`sidebar`] | Sidebar copy, hazards and opportunities |
//!
//! Everything here is derived from a [`site_registry::CityRegistry`]; overlays
//! are decorative and never feed the resolver.

use site_registry::RegistryError;
use thiserror::Error;

pub mod card;
pub mod map;
pub mod overlays;
pub mod panel;
pub mod sidebar;
pub mod suitability;

pub use card::{Badge, FactorRow, SiteCard, DEFAULT_SMR_MODEL};
pub use map::MapView;
pub use overlays::{hazard_overlays, HazardOverlay, OverlayKind};
pub use panel::{PanelEvent, PanelState, SitePanel};
pub use sidebar::SidebarContent;
pub use suitability::{Suitability, Tone};

#[derive(Error, Debug)]
pub enum PanelError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("Invalid panel command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
