// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Card error types.

use thiserror::Error;

use crate::profile::ValidationError;
use crate::store::StoreError;

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    Remote(String),

    #[error("Credential storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Errors surfaced by card operations.
#[derive(Error, Debug)]
pub enum CardError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Failed to load contact information: {0}")]
    Fetch(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

impl From<StoreError> for CardError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(username) => CardError::NotFound(username),
            other => CardError::Fetch(other.to_string()),
        }
    }
}
