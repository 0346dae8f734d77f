// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Edit Draft
//!
//! Mutable working copy of a profile while it is being edited. Nothing is
//! saved until [`ProfileDraft::submit`] produces a validated record, which
//! then replaces the stored one as a whole.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{non_empty, validate_profile, AccountType, BankAccount, ContactProfile, ProfileField};
use super::{UnknownAccountType, ValidationError};
use crate::social::SocialPlatform;

/// Draft editing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is not a text field")]
    NotATextField(ProfileField),
    #[error("Bank account {index} not found")]
    BankAccountNotFound { index: usize },
    #[error(transparent)]
    AccountType(#[from] UnknownAccountType),
    #[error("Unknown bank account field: {0}")]
    UnknownBankField(String),
}

/// Editable parts of a bank account row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankField {
    BankName,
    AccountNumber,
    AccountType,
    RoutingNumber,
    Swift,
}

impl BankField {
    pub fn key(&self) -> &'static str {
        match self {
            BankField::BankName => "bankName",
            BankField::AccountNumber => "accountNumber",
            BankField::AccountType => "accountType",
            BankField::RoutingNumber => "routingNumber",
            BankField::Swift => "swift",
        }
    }
}

impl fmt::Display for BankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BankField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        [
            BankField::BankName,
            BankField::AccountNumber,
            BankField::AccountType,
            BankField::RoutingNumber,
            BankField::Swift,
        ]
        .into_iter()
        .find(|f| f.key().to_lowercase() == wanted)
        .ok_or_else(|| DraftError::UnknownBankField(s.to_string()))
    }
}

/// Working copy of a profile under edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    profile: ContactProfile,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::from_profile(ContactProfile::default())
    }
}

impl ProfileDraft {
    /// Starts a draft from a stored profile.
    ///
    /// The form always offers at least one bank account row.
    pub fn from_profile(mut profile: ContactProfile) -> Self {
        if profile.bank_accounts.is_empty() {
            profile.bank_accounts.push(BankAccount::default());
        }
        ProfileDraft { profile }
    }

    /// Current state of the draft.
    pub fn profile(&self) -> &ContactProfile {
        &self.profile
    }

    /// Sets a text field. An empty value clears it.
    pub fn set_field(&mut self, field: ProfileField, value: &str) -> Result<(), DraftError> {
        if !self.profile.set_text(field, non_empty(value)) {
            return Err(DraftError::NotATextField(field));
        }
        Ok(())
    }

    /// Sets a social link from a URL or a bare handle. An empty value
    /// removes the link.
    pub fn set_social(&mut self, platform: SocialPlatform, value: &str) {
        if value.trim().is_empty() {
            self.profile.socials.remove(&platform);
        } else {
            self.profile
                .socials
                .insert(platform, platform.profile_url(value));
        }
    }

    /// Appends a blank checking account row and returns its index.
    pub fn add_bank_account(&mut self) -> usize {
        self.profile.bank_accounts.push(BankAccount::default());
        self.profile.bank_accounts.len() - 1
    }

    /// Removes a bank account row.
    pub fn remove_bank_account(&mut self, index: usize) -> Result<BankAccount, DraftError> {
        if index >= self.profile.bank_accounts.len() {
            return Err(DraftError::BankAccountNotFound { index });
        }
        Ok(self.profile.bank_accounts.remove(index))
    }

    /// Updates one part of a bank account row.
    pub fn update_bank_account(
        &mut self,
        index: usize,
        field: BankField,
        value: &str,
    ) -> Result<(), DraftError> {
        let account = self
            .profile
            .bank_accounts
            .get_mut(index)
            .ok_or(DraftError::BankAccountNotFound { index })?;

        match field {
            BankField::BankName => account.bank_name = non_empty(value),
            BankField::AccountNumber => account.account_number = non_empty(value),
            BankField::AccountType => account.account_type = value.parse::<AccountType>()?,
            BankField::RoutingNumber => account.routing_number = non_empty(value),
            BankField::Swift => account.swift = non_empty(value),
        }
        Ok(())
    }

    /// Finishes the edit.
    ///
    /// Blank bank rows are dropped and the result is validated; on error
    /// nothing is returned, so no partial record can be saved.
    pub fn submit(self) -> Result<ContactProfile, ValidationError> {
        let mut profile = self.profile;
        profile.name = profile.name.trim().to_string();
        profile.bank_accounts.retain(|a| !a.is_blank());
        validate_profile(&profile)?;
        Ok(profile)
    }
}
