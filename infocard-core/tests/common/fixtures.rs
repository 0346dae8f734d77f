// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures

use std::sync::atomic::{AtomicUsize, Ordering};

use infocard_core::*;

/// A profile with every field filled in.
pub fn full_profile() -> ContactProfile {
    ContactProfile::new("Ada Lovelace")
        .with_username("ada")
        .with_text(ProfileField::Title, "Analyst")
        .with_text(ProfileField::Company, "Analytical Engines")
        .with_text(ProfileField::Website, "https://ada.dev")
        .with_text(ProfileField::Bio, "First programmer")
        .with_text(ProfileField::ProfileImage, "/images/ada.png")
        .with_text(ProfileField::Email, "ada@example.com")
        .with_text(ProfileField::Phone, "+44 20 7946 0000")
        .with_text(ProfileField::Address, "12 St James's Square")
        .with_text(ProfileField::IdentificationNumber, "ID-1815")
        .with_text(ProfileField::TaxNumber, "TAX-1852")
        .with_social(SocialPlatform::GitHub, "https://github.com/ada")
        .with_bank_account(
            BankAccount::new("Coutts", "00112233", AccountType::Savings).with_swift("COUTGB22"),
        )
}

/// Signed-in demo session.
pub fn signed_in_session() -> DemoSession {
    let mut session = DemoSession::demo();
    session
        .login("admin", &Password::new("password123"))
        .expect("demo login");
    session
}

/// Store wrapper counting writes.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryProfileStore,
    pub updates: AtomicUsize,
}

impl CountingStore {
    pub fn demo() -> Self {
        CountingStore {
            inner: MemoryProfileStore::demo(),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl ProfileStore for CountingStore {
    fn fetch(&self, username: &str) -> Result<ContactProfile, StoreError> {
        self.inner.fetch(username)
    }

    fn update(&self, username: &str, profile: ContactProfile) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(username, profile)
    }

    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        self.inner.usernames()
    }
}

/// Store whose every call fails as a backend outage would.
pub struct UnreachableStore;

impl ProfileStore for UnreachableStore {
    fn fetch(&self, _username: &str) -> Result<ContactProfile, StoreError> {
        Err(StoreError::Fetch("connection refused".into()))
    }

    fn update(&self, _username: &str, _profile: ContactProfile) -> Result<(), StoreError> {
        Err(StoreError::Fetch("connection refused".into()))
    }

    fn usernames(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Fetch("connection refused".into()))
    }
}
