//! City registry
//!
//! Immutable after construction. All name lookups are exact-match and never
//! fail: unknown names get [`DEFAULT_SCORE`] and each factor's fallback.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::catalog::{Variant, DEFAULT_SCORE};
use crate::factors::{FactorAssessment, FactorKind, SiteFactor};
use crate::{RegistryError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Canned score and factor rows for one name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub score: u8,
    pub factors: Vec<SiteFactor>,
}

#[derive(Debug, Clone)]
struct FactorSchema {
    kind: FactorKind,
    fallback: FactorAssessment,
    overrides: HashMap<String, FactorAssessment>,
}

#[derive(Debug, Clone)]
pub struct CityRegistry {
    variant: Variant,
    locations: Vec<Location>,
    scores: HashMap<String, u8>,
    schema: Vec<FactorSchema>,
}

impl CityRegistry {
    /// Registry for one of the authored datasets
    pub fn for_variant(variant: Variant) -> Result<Self> {
        let data = variant.dataset();
        let mut builder = RegistryBuilder::new(variant);

        for &(name, lat, lon) in data.cities {
            builder = builder.location(name, lat, lon);
        }
        for &(name, score) in data.scores {
            builder = builder.score(name, score);
        }
        for table in data.factors {
            let (status, detail) = table.fallback;
            builder = builder.factor(table.kind, FactorAssessment::new(status, detail));
            for &(name, status, detail) in table.entries {
                builder = builder.override_factor(table.kind, name, FactorAssessment::new(status, detail));
            }
        }

        builder.build()
    }

    pub fn builder(variant: Variant) -> RegistryBuilder {
        RegistryBuilder::new(variant)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Locations in display order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a built registry
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&Location> {
        self.locations
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Factor categories in card row order
    pub fn factor_kinds(&self) -> impl Iterator<Item = FactorKind> + '_ {
        self.schema.iter().map(|s| s.kind)
    }

    pub fn score_for(&self, name: &str) -> u8 {
        self.scores.get(name).copied().unwrap_or(DEFAULT_SCORE)
    }

    /// Assessment of one factor for `name`, or `None` if the registry does
    /// not carry that factor at all
    pub fn assess_factor(&self, kind: FactorKind, name: &str) -> Option<FactorAssessment> {
        self.schema.iter().find(|s| s.kind == kind).map(|s| {
            s.overrides
                .get(name)
                .cloned()
                .unwrap_or_else(|| s.fallback.clone())
        })
    }

    /// Complete factor set for `name`
    pub fn factors_for(&self, name: &str) -> Vec<SiteFactor> {
        self.schema
            .iter()
            .map(|s| SiteFactor {
                kind: s.kind,
                assessment: s
                    .overrides
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| s.fallback.clone()),
            })
            .collect()
    }

    pub fn profile(&self, name: &str) -> SiteProfile {
        SiteProfile {
            name: name.to_string(),
            score: self.score_for(name),
            factors: self.factors_for(name),
        }
    }
}

/// Validating builder for [`CityRegistry`]
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    variant: Variant,
    locations: Vec<Location>,
    scores: Vec<(String, u8)>,
    schema: Vec<FactorSchema>,
    pending: Vec<(FactorKind, String, FactorAssessment)>,
}

impl RegistryBuilder {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            locations: Vec::new(),
            scores: Vec::new(),
            schema: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn location(mut self, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.locations.push(Location {
            name: name.into(),
            latitude,
            longitude,
        });
        self
    }

    pub fn score(mut self, name: impl Into<String>, score: u8) -> Self {
        self.scores.push((name.into(), score));
        self
    }

    /// Declare a factor row with its fallback. Re-declaring replaces the fallback.
    pub fn factor(mut self, kind: FactorKind, fallback: FactorAssessment) -> Self {
        match self.schema.iter_mut().find(|s| s.kind == kind) {
            Some(existing) => existing.fallback = fallback,
            None => self.schema.push(FactorSchema {
                kind,
                fallback,
                overrides: HashMap::new(),
            }),
        }
        self
    }

    pub fn override_factor(mut self, kind: FactorKind, name: impl Into<String>, assessment: FactorAssessment) -> Self {
        self.pending.push((kind, name.into(), assessment));
        self
    }

    pub fn build(self) -> Result<CityRegistry> {
        if self.locations.is_empty() {
            return Err(RegistryError::Empty);
        }

        {
            let mut seen = HashSet::with_capacity(self.locations.len());
            for loc in &self.locations {
                if !seen.insert(loc.name.as_str()) {
                    return Err(RegistryError::DuplicateName(loc.name.clone()));
                }
            }
        }

        let mut scores = HashMap::with_capacity(self.scores.len());
        for (name, score) in self.scores {
            if score > 100 {
                return Err(RegistryError::ScoreOutOfRange { name, score });
            }
            scores.insert(name, score);
        }

        let mut schema = self.schema;
        for (kind, name, assessment) in self.pending {
            let entry = schema
                .iter_mut()
                .find(|s| s.kind == kind)
                .ok_or(RegistryError::UndeclaredFactor(kind))?;
            entry.overrides.insert(name, assessment);
        }

        tracing::debug!(
            "Built {} registry: {} locations, {} factors",
            self.variant,
            self.locations.len(),
            schema.len()
        );

        Ok(CityRegistry {
            variant: self.variant,
            locations: self.locations,
            scores,
            schema,
        })
    }
}
