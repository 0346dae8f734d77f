// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain-text contact summary, for copying to the clipboard.

use super::bank_account_lines;
use crate::profile::ProfileField;
use crate::visibility::ResolvedProfile;

/// Text fields listed as `Label: value`, in order. Bio goes last on its own.
const SUMMARY_FIELDS: [ProfileField; 9] = [
    ProfileField::Name,
    ProfileField::Title,
    ProfileField::Company,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::Address,
    ProfileField::Website,
    ProfileField::IdentificationNumber,
    ProfileField::TaxNumber,
];

/// Builds the newline-delimited summary of a resolved profile.
pub fn export_summary(resolved: &ResolvedProfile) -> String {
    let profile = resolved.profile();
    let mut lines = Vec::new();

    for field in SUMMARY_FIELDS {
        if let Some(value) = resolved.text(field) {
            lines.push(format!("{}: {value}", field.label()));
        }
    }

    if resolved.is_visible(ProfileField::Socials) {
        for (platform, url) in &profile.socials {
            lines.push(format!("{}: {url}", platform.display_name()));
        }
    }

    if resolved.is_visible(ProfileField::BankAccounts) && !profile.bank_accounts.is_empty() {
        lines.push(String::new());
        lines.push("Bank Accounts:".to_string());
        for (index, account) in profile.bank_accounts.iter().enumerate() {
            lines.extend(bank_account_lines(index, account));
        }
    }

    if let Some(bio) = resolved.text(ProfileField::Bio) {
        lines.push(String::new());
        lines.push("About Me:".to_string());
        lines.push(bio.to_string());
    }

    lines.join("\n")
}
