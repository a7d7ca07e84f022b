//! Configuration System
//!
//! Loads run settings and model constants from a TOML file. Every field has
//! a default, so a file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::components::ParameterSet;
use crate::setup::DEFAULT_NUM_AGENTS;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "murene.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub params: ParameterSet,
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_agents: usize,
    pub steps: u64,
    /// Seed for the drift noise
    pub seed: u64,
    /// Steps between progress log lines
    pub report_interval: u64,
    /// Indices of agents flagged political at construction
    pub political_agents: Vec<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_agents: DEFAULT_NUM_AGENTS,
            steps: 3000,
            seed: 42,
            report_interval: 100,
            political_agents: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if it exists. A missing file gives `None`; an unreadable
    /// or invalid one is logged and also gives `None`.
    pub fn load_if_present(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return None;
        }
        match Self::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
                None
            }
        }
    }

    /// Load from the default path, or fall back to defaults if missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_if_present(DEFAULT_CONFIG_PATH).unwrap_or_default()
    }

    /// Render as a TOML document
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug, Error)]
#[error("TOML serialize error: {0}")]
pub struct TomlSerializeError(#[source] pub toml::ser::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.num_agents, 4);
        assert_eq!(config.simulation.steps, 3000);
        assert!(config.simulation.political_agents.is_empty());
        assert_eq!(config.params, ParameterSet::default());
    }

    #[test]
    fn test_partial_document() {
        let config = Config::from_str(
            r#"
            [simulation]
            num_agents = 6
            political_agents = [0, 3]

            [params]
            epsilon = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.num_agents, 6);
        assert_eq!(config.simulation.political_agents, vec![0, 3]);
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.params.epsilon, 0.25);
        assert_eq!(config.params.beta, 0.80);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.params.mu = 0.1;

        let text = config.to_toml().unwrap();
        assert!(text.contains("P_ext"));
        assert_eq!(Config::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_str("[simulation]\nnum_agents = \"four\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_if_present() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nsteps = 77").unwrap();
        let loaded = Config::load_if_present(file.path()).unwrap();
        assert_eq!(loaded.simulation.steps, 77);

        assert!(Config::load_if_present(file.path().with_extension("missing")).is_none());

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[simulation\n").unwrap();
        assert!(Config::load_if_present(broken.path()).is_none());
    }

    #[test]
    fn test_load_or_default_without_file() {
        assert!(!Path::new(DEFAULT_CONFIG_PATH).exists());
        assert_eq!(Config::load_or_default(), Config::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nsteps = 10").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.simulation.steps, 10);

        let missing = Config::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
