// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export Generator
//!
//! Text artifacts derived from a [`ResolvedProfile`]: a vCard 3.0 blob for
//! download and a plain-text summary for the clipboard. Both only ever see
//! the fields the resolver let through.
//!
//! [`ResolvedProfile`]: crate::visibility::ResolvedProfile

mod summary;
mod vcard;

pub use summary::export_summary;
pub use vcard::{escape_text, escape_uri, export_vcard, vcard_file_name, VCARD_MIME_TYPE};

use crate::profile::BankAccount;

/// Lines describing one bank account, headed `Bank {index+1}:`.
/// Empty parts are left out.
pub(crate) fn bank_account_lines(index: usize, account: &BankAccount) -> Vec<String> {
    let mut lines = vec![format!("Bank {}:", index + 1)];
    if let Some(bank_name) = account.bank_name.as_deref() {
        lines.push(format!("  Bank Name: {bank_name}"));
    }
    lines.push(format!("  Account Type: {}", account.account_type));
    if let Some(number) = account.account_number.as_deref() {
        lines.push(format!("  Account Number: {number}"));
    }
    if let Some(routing) = account.routing_number.as_deref() {
        lines.push(format!("  Routing Number: {routing}"));
    }
    if let Some(swift) = account.swift.as_deref() {
        lines.push(format!("  SWIFT: {swift}"));
    }
    lines
}
