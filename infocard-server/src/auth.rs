// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owner Authentication
//!
//! A single owner account checked against an Argon2 PHC hash. Issued tokens
//! are random hex strings kept in memory until logout; they do not expire
//! and are lost on restart.

use std::collections::HashMap;
use std::sync::Mutex;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use infocard_core::session::{Authenticator, Password, User};
use infocard_core::AuthError;
use rand::RngCore;
use tracing::{info, warn};

/// Password accepted when no hash is configured.
pub const DEMO_PASSWORD: &str = "password123";

/// Token length in bytes (hex-encoded to twice as many characters).
const TOKEN_BYTES: usize = 32;

const SALT_BYTES: usize = 16;

/// Authenticator for the card owner.
pub struct OwnerAuthenticator {
    username: String,
    password_hash: String,
    tokens: Mutex<HashMap<String, User>>,
}

impl OwnerAuthenticator {
    /// Creates an authenticator from a PHC hash string.
    pub fn new(username: &str, password_hash: &str) -> Result<Self, AuthError> {
        PasswordHash::new(password_hash)
            .map_err(|e| AuthError::Remote(format!("Invalid password hash: {}", e)))?;
        Ok(OwnerAuthenticator {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            tokens: Mutex::new(HashMap::new()),
        })
    }

    /// Creates an authenticator accepting the demo password.
    pub fn demo(username: &str) -> Result<Self, AuthError> {
        warn!("No admin password hash configured, accepting the demo password");
        let hash = hash_password(&Password::new(DEMO_PASSWORD))?;
        Self::new(username, &hash)
    }

    /// Number of live tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.lock().map(|t| t.len()).unwrap_or(0)
    }

    fn password_matches(&self, password: &Password) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.expose().as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl Authenticator for OwnerAuthenticator {
    fn login(&self, username: &str, password: &Password) -> Result<String, AuthError> {
        if username != self.username || !self.password_matches(password) {
            warn!("Rejected login for {:?}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        self.tokens
            .lock()
            .map_err(|_| AuthError::Remote("token registry poisoned".into()))?
            .insert(token.clone(), User::new(username));

        info!("Owner {} signed in", username);
        Ok(token)
    }

    fn verify(&self, token: &str) -> Result<User, AuthError> {
        self.tokens
            .lock()
            .map_err(|_| AuthError::Remote("token registry poisoned".into()))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }

    fn logout(&self, token: &str) -> Result<(), AuthError> {
        let removed = self
            .tokens
            .lock()
            .map_err(|_| AuthError::Remote("token registry poisoned".into()))?
            .remove(token);
        if let Some(user) = removed {
            info!("Owner {} signed out", user.username);
        }
        Ok(())
    }
}

/// Hashes a password into an Argon2id PHC string.
pub fn hash_password(password: &Password) -> Result<String, AuthError> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AuthError::Remote(format!("Password hashing failed: {}", e)))?;

    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Remote(format!("Password hashing failed: {}", e)))
}
