// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credential checks.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::AuthError;

/// Token issued by the demo authenticator.
pub const DEMO_TOKEN: &str = "demo-token";

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "password123";

/// A password held only as long as the login takes.
pub struct Password(String);

impl Password {
    pub fn new(password: &str) -> Self {
        Password(password.to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Password(password)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// The signed-in owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: &str) -> Self {
        User {
            username: username.to_string(),
        }
    }
}

/// Exchanges credentials for an opaque token and checks tokens.
pub trait Authenticator {
    /// Returns a token for valid credentials, or
    /// `AuthError::InvalidCredentials`.
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError>;

    /// Returns the user a token belongs to, or `AuthError::InvalidToken`.
    fn verify(&self, token: &str) -> Result<User, AuthError>;

    /// Revokes a token. Authenticators without server-side state have
    /// nothing to do.
    fn logout(&self, _token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError> {
        (**self).login(username, password)
    }

    fn verify(&self, token: &str) -> Result<User, AuthError> {
        (**self).verify(token)
    }

    fn logout(&self, token: &str) -> Result<(), AuthError> {
        (**self).logout(token)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for std::sync::Arc<A> {
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError> {
        (**self).login(username, password)
    }

    fn verify(&self, token: &str) -> Result<User, AuthError> {
        (**self).verify(token)
    }

    fn logout(&self, token: &str) -> Result<(), AuthError> {
        (**self).logout(token)
    }
}

/// Fixed-credential authenticator used when no backend is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError> {
        if username == DEMO_USERNAME && password.expose() == DEMO_PASSWORD {
            Ok(DEMO_TOKEN.to_string())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    fn verify(&self, token: &str) -> Result<User, AuthError> {
        if token == DEMO_TOKEN {
            Ok(User::new(DEMO_USERNAME))
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
