//! Gateway configuration from environment variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SITE_SCOUT_PORT` (then `PORT`) | 18700 |
//! | `SITE_SCOUT_BIND` | 0.0.0.0 |
//! | `SITE_SCOUT_UI_PATH` | ui/site-scout |
//! | `SITE_SCOUT_VARIANT` | core |
//! | `SITE_SCOUT_SMR_MODEL` | Pressurized Water SMR |

use site_panel::DEFAULT_SMR_MODEL;
use site_registry::Variant;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 18700;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_UI_PATH: &str = "ui/site-scout";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port {value:?} in {var}")]
    InvalidPort { var: &'static str, value: String },
    #[error("Invalid SITE_SCOUT_VARIANT: {0}")]
    InvalidVariant(#[from] site_registry::RegistryError),
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: String,
    pub port: u16,
    pub ui_path: PathBuf,
    pub variant: Variant,
    pub smr_model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            ui_path: PathBuf::from(DEFAULT_UI_PATH),
            variant: Variant::default(),
            smr_model: DEFAULT_SMR_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        for var in ["SITE_SCOUT_PORT", "PORT"] {
            if let Some(value) = get(var) {
                config.port = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort { var, value })?;
                break;
            }
        }

        if let Some(bind) = get("SITE_SCOUT_BIND") {
            config.bind = bind;
        }
        if let Some(path) = get("SITE_SCOUT_UI_PATH") {
            config.ui_path = PathBuf::from(path);
        }
        if let Some(variant) = get("SITE_SCOUT_VARIANT") {
            config.variant = variant.parse()?;
        }
        if let Some(model) = get("SITE_SCOUT_SMR_MODEL") {
            config.smr_model = model;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:18700");
        assert_eq!(config.variant, Variant::Core);
        assert_eq!(config.smr_model, "Pressurized Water SMR");
        assert_eq!(config.ui_path, PathBuf::from("ui/site-scout"));
    }

    #[test]
    fn test_port_precedence() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("SITE_SCOUT_PORT", "9000"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);

        let config = GatewayConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);

        let config = GatewayConfig::from_lookup(lookup(&[("SITE_SCOUT_PORT", " "), ("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_overrides() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("SITE_SCOUT_VARIANT", "hazard"),
            ("SITE_SCOUT_SMR_MODEL", "BWRX-300"),
            ("SITE_SCOUT_BIND", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.variant, Variant::Hazard);
        assert_eq!(config.smr_model, "BWRX-300");
        assert_eq!(config.addr(), "127.0.0.1:18700");
    }

    #[test]
    fn test_invalid_values() {
        let err = GatewayConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var: "PORT", .. }));

        let err = GatewayConfig::from_lookup(lookup(&[("SITE_SCOUT_VARIANT", "v3")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVariant(_)));

        let err = GatewayConfig::from_lookup(lookup(&[("SITE_SCOUT_VARIANT", "Latest")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid SITE_SCOUT_VARIANT: Unknown dataset variant: Latest");
    }
}
