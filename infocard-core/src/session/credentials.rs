// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted session credential.
//!
//! A client keeps exactly one opaque string between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Name of the credential file inside the data directory.
pub const TOKEN_FILE: &str = "token";

/// Storage for the single session credential.
pub trait CredentialStore {
    fn load(&mut self) -> Result<Option<String>, AuthError>;
    fn save(&mut self, token: &str) -> Result<(), AuthError>;
    fn clear(&mut self) -> Result<(), AuthError>;
}

/// Credential kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Option<String>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        MemoryCredentialStore {
            token: Some(token.to_string()),
        }
    }
}

impl From<Option<String>> for MemoryCredentialStore {
    fn from(token: Option<String>) -> Self {
        MemoryCredentialStore { token }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&mut self) -> Result<Option<String>, AuthError> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &str) -> Result<(), AuthError> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AuthError> {
        self.token = None;
        Ok(())
    }
}

/// Credential stored in `<data_dir>/token`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(data_dir: &Path) -> Self {
        FileCredentialStore {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&mut self) -> Result<Option<String>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear(&mut self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
