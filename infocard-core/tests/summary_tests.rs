// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the plain-text contact summary

#[allow(dead_code)]
mod common;

use common::fixtures::full_profile;
use infocard_core::*;

#[test]
fn test_full_summary() {
    let resolved = resolve(
        &full_profile(),
        true,
        RequestedView::Private,
        DeviceClass::Desktop,
    );

    let expected = "\
Name: Ada Lovelace
Title: Analyst
Company: Analytical Engines
Email: ada@example.com
Phone: +44 20 7946 0000
Address: 12 St James's Square
Website: https://ada.dev
Identification Number: ID-1815
Tax Number: TAX-1852
GitHub: https://github.com/ada

Bank Accounts:
Bank 1:
  Bank Name: Coutts
  Account Type: Savings
  Account Number: 00112233
  SWIFT: COUTGB22

About Me:
First programmer";

    assert_eq!(export_summary(&resolved), expected);
}

#[test]
fn test_public_summary_skips_private_sections() {
    let resolved = resolve(
        &full_profile(),
        false,
        RequestedView::Public,
        DeviceClass::Desktop,
    );
    let summary = export_summary(&resolved);

    assert!(summary.starts_with("Name: Ada Lovelace\nTitle: Analyst"));
    assert!(!summary.contains("Email:"));
    assert!(!summary.contains("Bank Accounts:"));
    assert!(!summary.contains("Tax Number:"));
    assert!(summary.ends_with("About Me:\nFirst programmer"));
}

#[test]
fn test_name_only_summary() {
    let resolved = resolve(
        &ContactProfile::new("Ada"),
        false,
        RequestedView::Private,
        DeviceClass::Desktop,
    );
    assert_eq!(export_summary(&resolved), "Name: Ada");
}
