// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Card Service
//!
//! Ties a profile store to the resolver and to the edit flow. The session
//! is passed in on every call.

use tracing::{error, info};

use crate::error::{AuthError, CardError};
use crate::profile::{ContactProfile, ProfileDraft};
use crate::session::{Authenticator, CredentialStore, Session};
use crate::store::{ProfileStore, StoreError};
use crate::visibility::{resolve, DeviceClass, RequestedView, ResolvedProfile};

/// Loads resolved cards and saves edits.
pub struct CardService<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> CardService<S> {
    pub fn new(store: S) -> Self {
        CardService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches a profile and resolves it for the given viewer.
    pub fn load_card<A: Authenticator, C: CredentialStore>(
        &self,
        username: &str,
        session: &Session<A, C>,
        requested: RequestedView,
        device: DeviceClass,
    ) -> Result<ResolvedProfile, CardError> {
        let profile = self.store.fetch(username).map_err(|e| {
            if !matches!(e, StoreError::NotFound(_)) {
                error!("Failed to load contact information for {}: {}", username, e);
            }
            e
        })?;

        Ok(resolve(
            &profile,
            session.is_authenticated(),
            requested,
            device,
        ))
    }

    /// Starts an edit of the stored profile.
    pub fn begin_edit<A: Authenticator, C: CredentialStore>(
        &self,
        username: &str,
        session: &Session<A, C>,
    ) -> Result<ProfileDraft, CardError> {
        if !session.is_authenticated() {
            return Err(AuthError::NotAuthenticated.into());
        }
        let profile = self.store.fetch(username)?;
        Ok(ProfileDraft::from_profile(profile))
    }

    /// Validates a draft and replaces the stored profile with it.
    ///
    /// Nothing reaches the store unless the session is signed in and the
    /// draft passes validation.
    pub fn submit_edit<A: Authenticator, C: CredentialStore>(
        &self,
        username: &str,
        session: &Session<A, C>,
        draft: ProfileDraft,
    ) -> Result<ContactProfile, CardError> {
        if !session.is_authenticated() {
            return Err(AuthError::NotAuthenticated.into());
        }

        let profile = draft.submit()?;
        self.store
            .update(username, profile.clone())
            .map_err(|e| {
                error!("Failed to update contact information for {}: {}", username, e);
                e
            })?;

        info!("Updated contact information for {}", username);
        Ok(profile)
    }
}
