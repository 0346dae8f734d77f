// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! SQLite-backed profile store.
//!
//! One row per username; the profile itself is kept as JSON so the table
//! does not change when the profile gains fields.

use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use super::{keyed, ProfileStore, StoreError};
use crate::profile::ContactProfile;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS profiles (
    username TEXT PRIMARY KEY NOT NULL,
    profile_json TEXT NOT NULL,
    updated_at INTEGER NOT NULL
)";

/// Profile store persisted in a SQLite database.
pub struct SqliteProfileStore {
    conn: Mutex<Connection>,
}

impl SqliteProfileStore {
    /// Opens or creates a store database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Creates an in-memory store (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(SCHEMA, [])?;
        Ok(SqliteProfileStore {
            conn: Mutex::new(conn),
        })
    }

    /// Inserts the given profiles if the table is empty.
    ///
    /// Returns the number of profiles written.
    pub fn seed_if_empty(
        &self,
        profiles: impl IntoIterator<Item = ContactProfile>,
    ) -> Result<usize, StoreError> {
        if !self.usernames()?.is_empty() {
            return Ok(0);
        }

        let mut seeded = 0;
        for profile in profiles {
            if let Some(username) = profile.username.clone() {
                self.update(&username, profile)?;
                seeded += 1;
            }
        }
        Ok(seeded)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ProfileStore for SqliteProfileStore {
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError> {
        let conn = self.lock()?;
        let result = conn.query_row(
            "SELECT profile_json FROM profiles WHERE username = ?1",
            params![username],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StoreError::NotFound(username.to_string()))
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(&keyed(username, profile))?;
        let updated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        self.lock()?.execute(
            "INSERT OR REPLACE INTO profiles (username, profile_json, updated_at)
             VALUES (?1, ?2, ?3)",
            params![username, json, updated_at],
        )?;
        Ok(())
    }

    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT username FROM profiles ORDER BY username")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let usernames = rows.collect::<Result<Vec<String>, _>>()?;
        Ok(usernames)
    }
}
