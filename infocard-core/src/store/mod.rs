// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Record Store
//!
//! Supplies profiles by username. Implementations are interchangeable:
//! an in-memory table (demo mode), a SQLite table (server persistence) and,
//! with the `remote` feature, the HTTP backend.
//!
//! Updates replace the stored record wholesale. There is no versioning or
//! conflict detection: the last write wins.

mod demo;
mod error;
mod memory;
#[cfg(feature = "remote")]
mod remote;
mod sqlite;

pub use demo::{demo_profiles, DEMO_DEFAULT_USERNAME};
pub use error::StoreError;
pub use memory::MemoryProfileStore;
#[cfg(feature = "remote")]
pub use remote::RemoteProfileStore;
pub use sqlite::SqliteProfileStore;

use crate::profile::ContactProfile;

/// Source of contact profiles.
pub trait ProfileStore: Send + Sync {
    /// Fetches the profile for `username`.
    ///
    /// Returns `StoreError::NotFound` for unknown usernames.
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError>;

    /// Replaces the profile stored under `username`.
    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError>;

    /// Lists known usernames, sorted.
    fn usernames(&self) -> Result<Vec<String>, StoreError>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for std::sync::Arc<S> {
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError> {
        (**self).fetch(username)
    }

    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError> {
        (**self).update(username, profile)
    }

    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        (**self).usernames()
    }
}

/// Stamps the key onto the record before it is stored.
pub(crate) fn keyed(username: &str, mut profile: ContactProfile) -> ContactProfile {
    profile.username = Some(username.to_string());
    profile
}
