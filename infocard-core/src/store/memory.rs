// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory profile store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{demo_profiles, keyed, ProfileStore, StoreError};
use crate::profile::ContactProfile;

/// Profiles held in a hash map. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, ContactProfile>>,
}

impl MemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the demo table.
    pub fn demo() -> Self {
        Self::with_profiles(demo_profiles())
    }

    /// Creates a store from profiles keyed by their `username`.
    /// Profiles without a username are skipped.
    pub fn with_profiles(profiles: impl IntoIterator<Item = ContactProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .filter_map(|p| p.username.clone().map(|u| (u, p)))
            .collect();
        MemoryProfileStore {
            profiles: RwLock::new(profiles),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError> {
        let profiles = self.profiles.read().map_err(|_| StoreError::LockPoisoned)?;
        profiles
            .get(username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(username.to_string()))
    }

    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().map_err(|_| StoreError::LockPoisoned)?;
        profiles.insert(username.to_string(), keyed(username, profile));
        Ok(())
    }

    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        let profiles = self.profiles.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut usernames: Vec<String> = profiles.keys().cloned().collect();
        usernames.sort();
        Ok(usernames)
    }
}
