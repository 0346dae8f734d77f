// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Validation
//!
//! Checks applied to an edit submission before it reaches a store.

use thiserror::Error;

use super::{ContactProfile, ProfileField};

/// Maximum name length, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for any other text value, in characters.
pub const MAX_VALUE_LENGTH: usize = 1000;

/// Maximum number of bank accounts per profile.
pub const MAX_BANK_ACCOUNTS: usize = 10;

/// URL schemes that must never end up behind a clickable link.
const BLOCKED_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "data:", "file:"];

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name too long (max {max} characters)")]
    NameTooLong { max: usize },
    #[error("{field} too long (max {max} characters)")]
    ValueTooLong { field: &'static str, max: usize },
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("{field} is not a safe link")]
    UnsafeLink { field: &'static str },
    #[error("Too many bank accounts (max {max})")]
    TooManyBankAccounts { max: usize },
}

/// Validates a whole profile.
pub fn validate_profile(profile: &ContactProfile) -> Result<(), ValidationError> {
    let name = profile.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }

    for field in ProfileField::ALL {
        if field == ProfileField::Name {
            continue;
        }
        if let Some(value) = profile.text(field) {
            check_length(field.label(), value)?;
        }
    }

    if let Some(email) = profile.email.as_deref() {
        validate_email(email)?;
    }

    for field in [ProfileField::Website, ProfileField::ProfileImage] {
        if let Some(link) = profile.text(field) {
            if !is_safe_link(link) {
                return Err(ValidationError::UnsafeLink {
                    field: field.label(),
                });
            }
        }
    }

    for (platform, url) in &profile.socials {
        check_length(platform.display_name(), url)?;
        if !is_safe_link(url) {
            return Err(ValidationError::UnsafeLink {
                field: platform.display_name(),
            });
        }
    }

    if profile.bank_accounts.len() > MAX_BANK_ACCOUNTS {
        return Err(ValidationError::TooManyBankAccounts {
            max: MAX_BANK_ACCOUNTS,
        });
    }
    for account in &profile.bank_accounts {
        for value in [
            &account.bank_name,
            &account.account_number,
            &account.routing_number,
            &account.swift,
        ]
        .into_iter()
        .flatten()
        {
            check_length("Bank account", value)?;
        }
    }

    Ok(())
}

/// Returns false for links using a scheme that can run code or read local
/// files, and for links containing line breaks or other control
/// characters. Relative paths and plain hosts are accepted.
pub fn is_safe_link(link: &str) -> bool {
    if link.chars().any(char::is_control) {
        return false;
    }
    let lower = link.trim().to_lowercase();
    !BLOCKED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

fn check_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_VALUE_LENGTH {
        return Err(ValidationError::ValueTooLong {
            field,
            max: MAX_VALUE_LENGTH,
        });
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(ValidationError::InvalidEmail),
    };

    if local.is_empty() || domain.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
