// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Demo profiles served when no backend is configured.

use crate::profile::{AccountType, BankAccount, ContactProfile, ProfileField};
use crate::social::SocialPlatform;

/// Profile shown when no username is given.
pub const DEMO_DEFAULT_USERNAME: &str = "daniel";

/// The fixed demo table.
pub fn demo_profiles() -> Vec<ContactProfile> {
    vec![
        ContactProfile::new("Daniel.Tuấn")
            .with_username("daniel")
            .with_text(ProfileField::Title, "Software Developer")
            .with_text(ProfileField::Company, "De heus")
            .with_text(ProfileField::Email, "qtuan1106@gmail.com")
            .with_text(ProfileField::Phone, "+84 824312814")
            .with_text(ProfileField::Address, "09 Nguyễn Lữ")
            .with_text(ProfileField::Website, "https://daniel11.github.io")
            .with_text(ProfileField::Bio, "Gen z")
            .with_text(ProfileField::ProfileImage, "/images/profile.png")
            .with_social(SocialPlatform::LinkedIn, "https://linkedin.com/in/johndoe")
            .with_social(SocialPlatform::Twitter, "https://twitter.com/johndoe")
            .with_social(SocialPlatform::GitHub, "https://github.com/johndoe")
            .with_social(SocialPlatform::Instagram, "https://instagram.com/johndoe")
            .with_bank_account(
                BankAccount::new("Techcombank", "1106018386", AccountType::Checking)
                    .with_routing_number("TECHCOMBANK")
                    .with_swift("VTCBVNVX"),
            )
            .with_text(ProfileField::TaxNumber, "123-45-6789")
            .with_text(ProfileField::IdentificationNumber, "AB-123456789"),
        ContactProfile::new("Nguyễn Ngọc Thiện")
            .with_username("thien")
            .with_text(ProfileField::Title, "Frontend Engineer")
            .with_text(ProfileField::Company, "VinAI")
            .with_text(ProfileField::Email, "ngocthien@gmail.com")
            .with_text(ProfileField::Phone, "+84 912345678")
            .with_text(ProfileField::Address, "123 Pasteur, HCMC")
            .with_text(ProfileField::Website, "https://ngocthien.dev")
            .with_text(ProfileField::Bio, "Just vibes & code")
            .with_text(ProfileField::ProfileImage, "/images/thien.png")
            .with_social(SocialPlatform::LinkedIn, "https://linkedin.com/in/ngocthien")
            .with_social(SocialPlatform::GitHub, "https://github.com/ngocthien")
            .with_bank_account(
                BankAccount::new("Vietcombank", "123456789", AccountType::Savings)
                    .with_routing_number("VCB")
                    .with_swift("BFTVVNVX"),
            )
            .with_text(ProfileField::TaxNumber, "987-65-4321")
            .with_text(ProfileField::IdentificationNumber, "CD-987654321"),
    ]
}
