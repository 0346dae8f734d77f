// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard 3.0 Export (RFC 2426)

use super::bank_account_lines;
use crate::profile::ProfileField;
use crate::visibility::ResolvedProfile;

/// MIME type of the exported file.
pub const VCARD_MIME_TYPE: &str = "text/vcard";

/// Exports a resolved profile as a vCard 3.0 string.
///
/// `TITLE` and `ORG` are always present (possibly empty); every other
/// property is only written when its field is filled in and visible.
pub fn export_vcard(resolved: &ResolvedProfile) -> String {
    let profile = resolved.profile();

    let mut lines = Vec::new();
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());
    lines.push(format!("FN:{}", escape_text(&profile.name)));
    lines.push(format!(
        "TITLE:{}",
        escape_text(resolved.text(ProfileField::Title).unwrap_or_default())
    ));
    lines.push(format!(
        "ORG:{}",
        escape_text(resolved.text(ProfileField::Company).unwrap_or_default())
    ));

    if let Some(email) = resolved.text(ProfileField::Email) {
        lines.push(format!("EMAIL:{}", escape_text(email)));
    }
    if let Some(phone) = resolved.text(ProfileField::Phone) {
        lines.push(format!("TEL:{}", escape_text(phone)));
    }
    if let Some(website) = resolved.text(ProfileField::Website) {
        lines.push(format!("URL:{}", escape_uri(website)));
    }
    if let Some(address) = resolved.text(ProfileField::Address) {
        lines.push(format!("ADR:;;{};;;;", escape_text(address)));
    }

    if resolved.is_visible(ProfileField::Socials) {
        for (platform, url) in &profile.socials {
            lines.push(format!("X-SOCIALPROFILE;TYPE={platform}:{}", escape_uri(url)));
        }
    }

    let note = note_lines(resolved);
    if !note.is_empty() {
        lines.push(format!("NOTE:{}", escape_text(&note.join("\n"))));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// Suggested download file name, `<name>.vcf`.
pub fn vcard_file_name(resolved: &ResolvedProfile) -> String {
    let stem: String = resolved
        .profile()
        .name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    let stem = stem.trim_matches('.');

    if stem.is_empty() {
        "contact.vcf".to_string()
    } else {
        format!("{stem}.vcf")
    }
}

/// Escapes a TEXT value: backslash, comma, semicolon and line breaks.
pub fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace("\r\n", "\\n")
        .replace(['\n', '\r'], "\\n")
}

/// Escapes line breaks in a URI value. Commas and semicolons are part of
/// URIs and stay as they are.
pub fn escape_uri(s: &str) -> String {
    s.replace("\r\n", "\\n").replace(['\n', '\r'], "\\n")
}

fn note_lines(resolved: &ResolvedProfile) -> Vec<String> {
    let mut note = Vec::new();

    if let Some(id) = resolved.text(ProfileField::IdentificationNumber) {
        note.push(format!("Identification Number: {id}"));
    }
    if let Some(tax) = resolved.text(ProfileField::TaxNumber) {
        note.push(format!("Tax Number: {tax}"));
    }

    let accounts = &resolved.profile().bank_accounts;
    if resolved.is_visible(ProfileField::BankAccounts) && !accounts.is_empty() {
        note.push("Bank Accounts:".to_string());
        for (index, account) in accounts.iter().enumerate() {
            note.extend(bank_account_lines(index, account));
        }
    }

    note
}
