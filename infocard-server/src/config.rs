// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server Configuration
//!
//! Read once at startup from `INFOCARD_*` environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use infocard_core::store::DEMO_DEFAULT_USERNAME;
use tracing::warn;

/// Where profiles are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Demo table in memory; edits are lost on restart.
    #[default]
    Memory,
    /// `profiles.db` in the data directory, seeded with the demo table.
    Sqlite,
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    /// Profile served by `GET /api/contact` and replaced by `PUT /api/contact`.
    pub default_username: String,
    pub admin_username: String,
    /// Argon2 PHC string. When unset the demo password is accepted.
    pub admin_password_hash: Option<String>,
    /// Base of share links and QR codes.
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            storage_backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
            default_username: DEMO_DEFAULT_USERNAME.to_string(),
            admin_username: "admin".to_string(),
            admin_password_hash: None,
            public_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();

        let listen_addr = match env::var("INFOCARD_LISTEN_ADDR") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("Invalid INFOCARD_LISTEN_ADDR {:?}, using default", value);
                defaults.listen_addr
            }),
            Err(_) => defaults.listen_addr,
        };

        let storage_backend = match env::var("INFOCARD_STORAGE").as_deref() {
            Ok("sqlite") => StorageBackend::Sqlite,
            Ok("memory") | Err(_) => StorageBackend::Memory,
            Ok(other) => {
                warn!("Unknown INFOCARD_STORAGE {:?}, using memory", other);
                StorageBackend::Memory
            }
        };

        ServerConfig {
            listen_addr,
            storage_backend,
            data_dir: env::var("INFOCARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_username: env::var("INFOCARD_DEFAULT_USERNAME")
                .unwrap_or(defaults.default_username),
            admin_username: env::var("INFOCARD_ADMIN_USERNAME")
                .unwrap_or(defaults.admin_username),
            admin_password_hash: env::var("INFOCARD_ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|h| !h.trim().is_empty()),
            public_url: env::var("INFOCARD_PUBLIC_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_url),
        }
    }

    /// Path of the SQLite database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("profiles.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.default_username, "daniel");
        assert!(config.admin_password_hash.is_none());
    }

    #[test]
    fn test_database_path() {
        let config = ServerConfig {
            data_dir: PathBuf::from("/var/lib/infocard"),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/var/lib/infocard/profiles.db")
        );
    }
}
