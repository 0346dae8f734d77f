//! Configuration for loading and sharing cards

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Where profiles come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataMode {
    /// Built-in demo table, no backend.
    #[default]
    Demo,
    /// The HTTP backend at `api_url`.
    Remote,
}

/// Unknown data mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown data mode: {0} (expected demo or remote)")]
pub struct UnknownDataMode(pub String);

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataMode::Demo => f.write_str("demo"),
            DataMode::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for DataMode {
    type Err = UnknownDataMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(DataMode::Demo),
            "remote" => Ok(DataMode::Remote),
            _ => Err(UnknownDataMode(s.to_string())),
        }
    }
}

/// Configuration for the card client
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Profile source
    pub mode: DataMode,

    /// Backend base URL (e.g., "http://localhost:3000/api")
    pub api_url: String,

    /// Base of share links and QR codes (e.g., "https://card.example.com")
    pub share_base_url: String,

    /// HTTP timeout for backend calls
    pub timeout: Duration,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            mode: DataMode::Demo,
            api_url: "http://localhost:3000/api".to_string(),
            share_base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl CardConfig {
    /// Use the HTTP backend at `api_url`.
    pub fn with_remote(mut self, api_url: &str) -> Self {
        self.mode = DataMode::Remote;
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_share_base_url(mut self, share_base_url: &str) -> Self {
        self.share_base_url = share_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo() {
        assert_eq!(CardConfig::default().mode, DataMode::Demo);
    }

    #[test]
    fn test_with_remote_trims_trailing_slash() {
        let config = CardConfig::default().with_remote("https://api.example.com/");
        assert_eq!(config.mode, DataMode::Remote);
        assert_eq!(config.api_url, "https://api.example.com");
    }
}
