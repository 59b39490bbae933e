//! Optional TOML configuration for the onboarding app.
//!
//! ```toml
//! brand = "Modulus Sell"
//! tick_ms = 100
//! transitions = true
//! log_file = "/tmp/modulus-onboard.log"
//!
//! [location]
//! city = "Mumbai"
//! pincode = "400001"
//! ```

use crate::location::FixedLocation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnboardConfig {
    /// Name shown in the title bar and on the welcome screen.
    pub brand: String,
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
    /// Slide the content panel on step changes.
    pub transitions: bool,
    pub location: LocationConfig,
    pub log_file: Option<PathBuf>,
}

/// Values used by "Use Current Location".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    pub city: String,
    pub pincode: String,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            brand: "Modulus Sell".to_string(),
            tick_ms: 100,
            transitions: true,
            location: LocationConfig::default(),
            log_file: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            city: "Mumbai".to_string(),
            pincode: "400001".to_string(),
        }
    }
}

impl OnboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: OnboardConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::Invalid("brand must not be empty".into()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn location_provider(&self) -> FixedLocation {
        FixedLocation::new(&self.location.city, &self.location.pincode)
    }
}
