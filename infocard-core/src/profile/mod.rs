// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Profile Module
//!
//! The single record behind a business card: public details, private
//! contact details, identification numbers and bank accounts.

mod draft;
mod validation;

pub use draft::{BankField, DraftError, ProfileDraft};
pub use validation::{
    is_safe_link, validate_profile, ValidationError, MAX_BANK_ACCOUNTS, MAX_NAME_LENGTH,
    MAX_VALUE_LENGTH,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::social::SocialPlatform;

// Incoming forms send "" for untouched inputs; those mean "absent".
mod empty_as_none {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.trim().is_empty()))
    }
}

mod social_links {
    use super::SocialPlatform;
    use serde::{Deserialize, Deserializer};
    use std::collections::BTreeMap;

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<SocialPlatform, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<SocialPlatform, Option<String>>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(platform, url)| {
                url.filter(|u| !u.trim().is_empty()).map(|u| (platform, u))
            })
            .collect())
    }
}

/// Kind of bank account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Business,
    Investment,
}

/// Unknown account type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown account type: {0} (expected Checking, Savings, Business or Investment)")]
pub struct UnknownAccountType(pub String);

impl AccountType {
    /// All account types, in form order.
    pub const ALL: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Business,
        AccountType::Investment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Business => "Business",
            AccountType::Investment => "Investment",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAccountType(s.to_string()))
    }
}

/// A bank account listed on the card.
///
/// All parts are optional; no numeric validation is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub swift: Option<String>,
}

impl BankAccount {
    /// Creates an account with a bank name and number.
    pub fn new(bank_name: &str, account_number: &str, account_type: AccountType) -> Self {
        BankAccount {
            bank_name: non_empty(bank_name),
            account_number: non_empty(account_number),
            account_type,
            routing_number: None,
            swift: None,
        }
    }

    pub fn with_routing_number(mut self, routing_number: &str) -> Self {
        self.routing_number = non_empty(routing_number);
        self
    }

    pub fn with_swift(mut self, swift: &str) -> Self {
        self.swift = non_empty(swift);
        self
    }

    /// Returns true if no text part is filled in.
    ///
    /// The account type alone does not make a row meaningful.
    pub fn is_blank(&self) -> bool {
        self.bank_name.is_none()
            && self.account_number.is_none()
            && self.routing_number.is_none()
            && self.swift.is_none()
    }
}

/// Named fields of a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Title,
    Company,
    Website,
    Bio,
    ProfileImage,
    Socials,
    Email,
    Phone,
    Address,
    IdentificationNumber,
    TaxNumber,
    BankAccounts,
}

/// Unknown field name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown profile field: {0}")]
pub struct UnknownField(pub String);

impl ProfileField {
    /// Every field, in card order.
    pub const ALL: [ProfileField; 13] = [
        ProfileField::Name,
        ProfileField::Title,
        ProfileField::Company,
        ProfileField::Website,
        ProfileField::Bio,
        ProfileField::ProfileImage,
        ProfileField::Socials,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Address,
        ProfileField::IdentificationNumber,
        ProfileField::TaxNumber,
        ProfileField::BankAccounts,
    ];

    /// JSON key of the field.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Title => "title",
            ProfileField::Company => "company",
            ProfileField::Website => "website",
            ProfileField::Bio => "bio",
            ProfileField::ProfileImage => "profileImage",
            ProfileField::Socials => "socials",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Address => "address",
            ProfileField::IdentificationNumber => "identificationNumber",
            ProfileField::TaxNumber => "taxNumber",
            ProfileField::BankAccounts => "bankAccounts",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Title => "Title",
            ProfileField::Company => "Company",
            ProfileField::Website => "Website",
            ProfileField::Bio => "About Me",
            ProfileField::ProfileImage => "Profile Image",
            ProfileField::Socials => "Social Media",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Address => "Address",
            ProfileField::IdentificationNumber => "Identification Number",
            ProfileField::TaxNumber => "Tax Number",
            ProfileField::BankAccounts => "Bank Accounts",
        }
    }

    /// Returns true for fields holding a single string.
    pub fn is_text(&self) -> bool {
        !matches!(self, ProfileField::Socials | ProfileField::BankAccounts)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = UnknownField;

    /// Accepts the JSON key in any case, with or without `-`/`_`
    /// separators (`taxNumber`, `tax-number`, `TAX_NUMBER`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        ProfileField::ALL
            .into_iter()
            .find(|f| f.key().to_lowercase() == wanted)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A contact profile, one per username.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProfile {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub username: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "social_links::deserialize")]
    pub socials: BTreeMap<SocialPlatform, String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub identification_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "empty_as_none::deserialize")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,
}

impl ContactProfile {
    /// Creates a profile holding only a name.
    pub fn new(name: &str) -> Self {
        ContactProfile {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = non_empty(username);
        self
    }

    /// Sets a text field, builder style. Non-text fields are left untouched.
    pub fn with_text(mut self, field: ProfileField, value: &str) -> Self {
        self.set_text(field, non_empty(value));
        self
    }

    pub fn with_social(mut self, platform: SocialPlatform, url: &str) -> Self {
        self.socials.insert(platform, url.to_string());
        self
    }

    pub fn with_bank_account(mut self, account: BankAccount) -> Self {
        self.bank_accounts.push(account);
        self
    }

    /// Returns the value of a text field, if present and non-empty.
    ///
    /// Always `None` for `Socials` and `BankAccounts`.
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::Name => Some(self.name.as_str()),
            ProfileField::Title => self.title.as_deref(),
            ProfileField::Company => self.company.as_deref(),
            ProfileField::Website => self.website.as_deref(),
            ProfileField::Bio => self.bio.as_deref(),
            ProfileField::ProfileImage => self.profile_image.as_deref(),
            ProfileField::Email => self.email.as_deref(),
            ProfileField::Phone => self.phone.as_deref(),
            ProfileField::Address => self.address.as_deref(),
            ProfileField::IdentificationNumber => self.identification_number.as_deref(),
            ProfileField::TaxNumber => self.tax_number.as_deref(),
            ProfileField::Socials | ProfileField::BankAccounts => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// Returns true if the field carries a value.
    pub fn has_value(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Socials => !self.socials.is_empty(),
            ProfileField::BankAccounts => !self.bank_accounts.is_empty(),
            _ => self.text(field).is_some(),
        }
    }

    /// Sets a text field. Returns false for non-text fields.
    pub(crate) fn set_text(&mut self, field: ProfileField, value: Option<String>) -> bool {
        let slot = match field {
            ProfileField::Name => {
                self.name = value.unwrap_or_default();
                return true;
            }
            ProfileField::Title => &mut self.title,
            ProfileField::Company => &mut self.company,
            ProfileField::Website => &mut self.website,
            ProfileField::Bio => &mut self.bio,
            ProfileField::ProfileImage => &mut self.profile_image,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Address => &mut self.address,
            ProfileField::IdentificationNumber => &mut self.identification_number,
            ProfileField::TaxNumber => &mut self.tax_number,
            ProfileField::Socials | ProfileField::BankAccounts => return false,
        };
        *slot = value;
        true
    }

    /// Removes whatever the field holds.
    pub(crate) fn clear(&mut self, field: ProfileField) {
        match field {
            ProfileField::Socials => self.socials.clear(),
            ProfileField::BankAccounts => self.bank_accounts.clear(),
            _ => {
                self.set_text(field, None);
            }
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
