//! Configuration management
//!
//! Handles loading and saving the configuration shared by the GUI shell and
//! the session layer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::agent::DEFAULT_AGENT_URL;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Local wallet-agent bridge endpoint
    pub agent_url: String,

    /// Optional fixed Horizon endpoint; when set, network detection no
    /// longer moves the query endpoint
    pub horizon_url: Option<String>,

    /// Directory where session data is stored
    pub data_dir: PathBuf,

    /// Seconds between automatic balance refreshes while connected
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_url: DEFAULT_AGENT_URL.to_string(),
            horizon_url: None,
            data_dir: default_data_dir(),
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            tracing::info!(
                "No config file found, creating default at: {}",
                config_path.display()
            );
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_file_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        tracing::info!("Saved config to: {}", config_path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.agent_url)
            .with_context(|| format!("Invalid agent URL: {}", self.agent_url))?;

        if let Some(ref horizon_url) = self.horizon_url {
            Url::parse(horizon_url)
                .with_context(|| format!("Invalid Horizon URL: {}", horizon_url))?;
        }

        if self.refresh_interval_secs == 0 {
            return Err(anyhow::anyhow!("Refresh interval must be at least 1 second"));
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).with_context(|| {
                format!("Cannot create data directory: {}", self.data_dir.display())
            })?;
        }

        Ok(())
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "agrocylo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".agrocylo")
        })
}

fn default_refresh_interval() -> u64 {
    30
}

/// Get the configuration file path
fn config_file_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "agrocylo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config").join("agrocylo")
        })
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = Config {
            agent_url: "http://localhost:9000".to_string(),
            horizon_url: Some("https://horizon.stellar.org".to_string()),
            data_dir: PathBuf::from("/tmp/agrocylo"),
            refresh_interval_secs: 15,
        };

        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("agent_url = \"http://localhost:9000\""));
        assert!(toml.contains("horizon_url = \"https://horizon.stellar.org\""));

        let deserialized: Config = toml::from_str(&toml).unwrap();
        assert_eq!(deserialized.agent_url, config.agent_url);
        assert_eq!(deserialized.horizon_url, config.horizon_url);
        assert_eq!(deserialized.refresh_interval_secs, 15);
    }

    #[test]
    fn test_refresh_interval_defaults_when_absent() {
        let config: Config = toml::from_str(
            "agent_url = \"http://localhost:9000\"\ndata_dir = \"/tmp/agrocylo\"\n",
        )
        .unwrap();
        assert_eq!(config.refresh_interval_secs, 30);
    }

    #[test]
    fn test_url_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        assert!(config.validate().is_ok());

        config.agent_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.agent_url = DEFAULT_AGENT_URL.to_string();
        config.horizon_url = Some("also not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_refresh_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            refresh_interval_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
