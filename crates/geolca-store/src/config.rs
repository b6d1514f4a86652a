//! Store catalog configuration.
//!
//! The catalog names each archetype the store can serve, together with the
//! expected table shape, and locates the backing data directory produced by
//! the external preparation step.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use geolca_core::Archetype;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Store catalog: data directory plus one entry per servable archetype.
///
/// # Examples
///
/// Load a catalog from TOML:
///
/// ```
/// use geolca_store::StoreConfig;
///
/// let config = StoreConfig::from_toml_str(r#"
///     data_dir = "data"
///
///     [[archetypes]]
///     id = "egs_power_5"
///     categories = 16
///     parameter_slots = 10
///
///     [[archetypes]]
///     id = "egs_heat"
///     categories = 8
///     parameter_slots = 14
/// "#).unwrap();
///
/// assert_eq!(config.archetypes.len(), 2);
/// assert_eq!(config.get("egs_heat").unwrap().categories, 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Directory holding the prepared coefficient-table files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Archetypes this store can serve.
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: default_data_dir(),
            archetypes: Vec::new(),
        }
    }
}

impl StoreConfig {
    /// Creates a catalog rooted at the given data directory, with no
    /// archetypes registered yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            archetypes: Vec::new(),
        }
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, contains invalid TOML,
    /// or registers the same archetype id twice.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style archetype registration.
    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetypes.push(archetype);
        self
    }

    /// Looks up the descriptor registered for an archetype id.
    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, archetype) in self.archetypes.iter().enumerate() {
            if self.archetypes[..index].iter().any(|a| a.id == archetype.id) {
                return Err(ConfigError::Invalid(format!(
                    "archetype `{}` registered twice",
                    archetype.id
                )));
            }
        }
        Ok(())
    }
}
