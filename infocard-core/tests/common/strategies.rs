// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use infocard_core::*;
use proptest::option;
use proptest::prelude::*;

// ============================================================
// String Strategies
// ============================================================

/// Strategy for generating display names (non-empty, reasonable length).
pub fn display_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,49}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Strategy for generating short free-text values.
pub fn text_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.;-]{1,40}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Strategy for generating email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10,15}".prop_map(|n| format!("+{}", n))
}

/// Strategy for generating URLs.
pub fn url_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,4}")
        .prop_map(|(domain, tld)| format!("https://{}.{}", domain, tld))
}

// ============================================================
// Domain Strategies
// ============================================================

pub fn device_strategy() -> impl Strategy<Value = DeviceClass> {
    prop_oneof![Just(DeviceClass::Desktop), Just(DeviceClass::Mobile)]
}

pub fn requested_view_strategy() -> impl Strategy<Value = RequestedView> {
    prop_oneof![Just(RequestedView::Private), Just(RequestedView::Public)]
}

pub fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    prop_oneof![
        Just(AccountType::Checking),
        Just(AccountType::Savings),
        Just(AccountType::Business),
        Just(AccountType::Investment),
    ]
}

pub fn bank_account_strategy() -> impl Strategy<Value = BankAccount> {
    (
        "[A-Z][a-z]{2,10}",
        "[0-9]{6,12}",
        account_type_strategy(),
        option::of("[A-Z]{8}"),
    )
        .prop_map(|(bank, number, account_type, swift)| {
            let account = BankAccount::new(&bank, &number, account_type);
            match swift {
                Some(swift) => account.with_swift(&swift),
                None => account,
            }
        })
}

/// Strategy for profiles with a random subset of fields filled in.
pub fn profile_strategy() -> impl Strategy<Value = ContactProfile> {
    (
        display_name_strategy(),
        option::of(text_value_strategy()),
        option::of(text_value_strategy()),
        option::of(url_strategy()),
        option::of(email_strategy()),
        option::of(phone_strategy()),
        option::of(text_value_strategy()),
        option::of(text_value_strategy()),
        option::of(text_value_strategy()),
        option::of(url_strategy()),
        prop::collection::vec(bank_account_strategy(), 0..3),
    )
        .prop_map(
            |(name, title, company, website, email, phone, address, id, tax, github, banks)| {
                let mut profile = ContactProfile::new(&name).with_username("prop");
                let texts = [
                    (ProfileField::Title, title),
                    (ProfileField::Company, company),
                    (ProfileField::Website, website),
                    (ProfileField::Email, email),
                    (ProfileField::Phone, phone),
                    (ProfileField::Address, address),
                    (ProfileField::IdentificationNumber, id),
                    (ProfileField::TaxNumber, tax),
                ];
                for (field, value) in texts {
                    if let Some(value) = value {
                        profile = profile.with_text(field, &value);
                    }
                }
                if let Some(github) = github {
                    profile = profile.with_social(SocialPlatform::GitHub, &github);
                }
                for bank in banks {
                    profile = profile.with_bank_account(bank);
                }
                profile
            },
        )
}
