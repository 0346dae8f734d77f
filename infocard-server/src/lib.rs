// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod auth;
pub mod config;
pub mod http;

use std::sync::Arc;

use infocard_core::store::demo_profiles;
use infocard_core::{MemoryProfileStore, ProfileStore, SqliteProfileStore};
use tracing::info;

use auth::OwnerAuthenticator;
use config::{ServerConfig, StorageBackend};
use http::AppState;

/// Opens the configured profile store, seeding it with the demo table.
pub fn create_profile_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProfileStore>> {
    match config.storage_backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryProfileStore::demo())),
        StorageBackend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir)?;
            let store = SqliteProfileStore::open(config.database_path())?;
            let seeded = store.seed_if_empty(demo_profiles())?;
            if seeded > 0 {
                info!("Seeded {} demo profiles", seeded);
            }
            Ok(Arc::new(store))
        }
    }
}

/// Builds the shared handler state from configuration.
pub fn create_app_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let store = create_profile_store(config)?;
    let auth = match &config.admin_password_hash {
        Some(hash) => OwnerAuthenticator::new(&config.admin_username, hash)?,
        None => OwnerAuthenticator::demo(&config.admin_username)?,
    };
    Ok(AppState::new(
        store,
        auth,
        &config.default_username,
        &config.public_url,
    ))
}
