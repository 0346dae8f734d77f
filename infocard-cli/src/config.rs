//! CLI Configuration

use std::path::PathBuf;

use infocard_core::session::TOKEN_FILE;
use infocard_core::{CardConfig, DataMode};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for the credential and the local store.
    pub data_dir: PathBuf,
    /// Backend API URL. Without one the CLI works on a local store.
    pub api_url: Option<String>,
    /// Base of share links.
    pub share_url: String,
}

impl CliConfig {
    /// Returns the default data directory, `~/.infocard`.
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".infocard")
    }

    /// Returns the local profile database path.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("profiles.db")
    }

    /// Returns the session credential path.
    pub fn credential_path(&self) -> PathBuf {
        self.data_dir.join(TOKEN_FILE)
    }

    /// Client configuration for the core library.
    pub fn card_config(&self) -> CardConfig {
        let config = CardConfig::default().with_share_base_url(&self.share_url);
        match self.api_url.as_deref() {
            Some(api_url) => config.with_remote(api_url),
            None => config,
        }
    }

    pub fn data_mode(&self) -> DataMode {
        self.card_config().mode
    }
}
