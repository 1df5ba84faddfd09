//! Persisted wallet-session storage
//!
//! Two string keys survive restarts: the connected address and the network
//! name. They live in a TOML file under the data directory, read once at
//! startup, written on successful connect, removed on disconnect.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SESSION_FILE: &str = "session.toml";

/// The persisted subset of a wallet session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub address: Option<String>,
    pub network: Option<String>,
}

/// File-backed store for the persisted session keys
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(SESSION_FILE),
        }
    }

    /// Read the stored session, or the empty default when none exists
    pub fn load(&self) -> Result<StoredSession> {
        if !self.path.exists() {
            return Ok(StoredSession::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse session file: {}", self.path.display()))
    }

    pub fn save_address(&self, address: &str) -> Result<()> {
        let mut stored = self.load().unwrap_or_default();
        stored.address = Some(address.to_string());
        self.save(&stored)
    }

    pub fn save_network(&self, network: &str) -> Result<()> {
        let mut stored = self.load().unwrap_or_default();
        stored.network = Some(network.to_string());
        self.save(&stored)
    }

    /// Remove both keys. A missing file counts as already cleared.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            }),
        }
    }

    fn save(&self, stored: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }
        let contents = toml::to_string_pretty(stored).context("Failed to serialize session")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}
