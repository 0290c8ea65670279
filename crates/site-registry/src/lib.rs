//! Site Registry Library
//!
//! Static registry of Myanmar candidate cities for SMR siting, with
//! hand-authored suitability scores and per-factor assessments.
//!
//! - [`catalog`]: the authored datasets (`core` and `hazard` variants)
//! - [`registry`]: validated, immutable [`CityRegistry`] with fallback lookups
//! - [`resolver`]: nearest-city resolution for arbitrary map clicks
//!
//! Distances are plain squared Euclidean over raw lat/lng degrees. There is no
//! geodesic correction and no distance cutoff: every click resolves to a city.

use thiserror::Error;

pub mod catalog;
pub mod factors;
pub mod registry;
pub mod resolver;

pub use catalog::{Variant, DEFAULT_SCORE};
pub use factors::{FactorAssessment, FactorKind, FactorStatus, SiteFactor};
pub use registry::{CityRegistry, Location, RegistryBuilder, SiteProfile};
pub use resolver::{Nearest, SiteAssessment, SiteResolver};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Registry has no locations")]
    Empty,
    #[error("Duplicate location name: {0}")]
    DuplicateName(String),
    #[error("Score for {name} out of range: {score} (expected 0-100)")]
    ScoreOutOfRange { name: String, score: u8 },
    #[error("Factor {0} has no fallback in this registry")]
    UndeclaredFactor(FactorKind),
    #[error("Unknown dataset variant: {0}")]
    UnknownVariant(String),
    #[error("Location not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
