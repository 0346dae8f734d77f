// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session/Auth Gate
//!
//! A [`Session`] is an explicit context object owned by the caller. It
//! holds the credential of the signed-in owner and exposes a single
//! boolean, [`Session::is_authenticated`], to the visibility resolver.
//! There is no process-wide session.

mod authenticator;
mod credentials;
#[cfg(feature = "remote")]
mod remote;

pub use authenticator::{Authenticator, DemoAuthenticator, Password, User, DEMO_TOKEN};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_FILE};
#[cfg(feature = "remote")]
pub use remote::RemoteAuthenticator;

use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::error::AuthError;

/// Header carrying the session credential.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Message recorded when a login fails for any other reason than bad
/// credentials.
pub const LOGIN_FAILED: &str = "Login failed";

/// Authentication state for one client.
pub struct Session<A: Authenticator, C: CredentialStore> {
    authenticator: A,
    credentials: C,
    token: Option<String>,
    user: Option<User>,
    last_error: Option<String>,
}

impl<A: Authenticator, C: CredentialStore> std::fmt::Debug for Session<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl<A: Authenticator, C: CredentialStore> Drop for Session<A, C> {
    fn drop(&mut self) {
        if let Some(token) = self.token.as_mut() {
            token.zeroize();
        }
    }
}

impl<A: Authenticator, C: CredentialStore> Session<A, C> {
    /// Starts a session from the persisted credential, if any.
    ///
    /// A stored credential is verified once. If verification fails for any
    /// reason the credential is discarded and the session starts signed out.
    pub fn init(authenticator: A, mut credentials: C) -> Self {
        let stored = match credentials.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored credential: {}", e);
                None
            }
        };

        let mut session = Session {
            authenticator,
            credentials,
            token: None,
            user: None,
            last_error: None,
        };

        if let Some(token) = stored {
            match session.authenticator.verify(&token) {
                Ok(user) => {
                    debug!("Restored session for {}", user.username);
                    session.token = Some(token);
                    session.user = Some(user);
                }
                Err(e) => {
                    warn!("Stored credential rejected: {}", e);
                    if let Err(e) = session.credentials.clear() {
                        warn!("Failed to clear stored credential: {}", e);
                    }
                }
            }
        }

        session
    }

    /// Signs in and persists the credential.
    ///
    /// On failure the session is left as it was and [`Session::last_error`]
    /// holds a message for display.
    pub fn login(&mut self, username: &str, password: &Password) -> Result<(), AuthError> {
        match self.try_login(username, password) {
            Ok((token, user)) => {
                debug!("Signed in as {}", user.username);
                self.token = Some(token);
                self.user = Some(user);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(match e {
                    AuthError::InvalidCredentials => e.to_string(),
                    _ => LOGIN_FAILED.to_string(),
                });
                Err(e)
            }
        }
    }

    fn try_login(
        &mut self,
        username: &str,
        password: &Password,
    ) -> Result<(String, User), AuthError> {
        let token = self.authenticator.login(username, password)?;
        let user = self.authenticator.verify(&token)?;
        self.credentials.save(&token)?;
        Ok((token, user))
    }

    /// Signs out, revokes the token and discards the persisted credential.
    ///
    /// The in-memory state is cleared even if revoking the token or
    /// removing the stored credential fails.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        if let Some(mut token) = self.token.take() {
            if let Err(e) = self.authenticator.logout(&token) {
                warn!("Failed to revoke session token: {}", e);
            }
            token.zeroize();
        }
        self.user = None;
        self.last_error = None;
        self.credentials.clear()
    }

    /// Ends the session context. The persisted credential is kept.
    pub fn dispose(self) {
        debug!("Session disposed");
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Message of the most recent failed login.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Session over the demo authenticator and an in-memory credential.
pub type DemoSession = Session<DemoAuthenticator, MemoryCredentialStore>;

impl DemoSession {
    /// Fresh signed-out demo session.
    pub fn demo() -> Self {
        Session::init(DemoAuthenticator, MemoryCredentialStore::default())
    }
}
