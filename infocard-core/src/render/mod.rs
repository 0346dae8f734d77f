// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Card Renderer
//!
//! Builds the view model of a card for its three views: contact info,
//! sharing (link + QR code) and NFC tag programming. Input is always a
//! [`ResolvedProfile`], so the renderer never decides visibility itself.

mod share;

pub use share::{ndef_uri_record, qr_svg, qr_text, share_url, svg_data_uri, ShareError};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::export::export_summary;
use crate::profile::{BankAccount, ProfileField};
use crate::social::SocialPlatform;
use crate::visibility::{ResolvedProfile, ViewMode};

/// Placeholder shown instead of an initial when the name is empty.
pub const PLACEHOLDER_INITIAL: char = '?';

/// Which view of the card to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardView {
    #[default]
    Info,
    Share,
    Nfc,
}

/// Unknown card view name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown card view: {0} (expected info, share or nfc)")]
pub struct UnknownCardView(pub String);

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Info => f.write_str("info"),
            CardView::Share => f.write_str("share"),
            CardView::Nfc => f.write_str("nfc"),
        }
    }
}

impl FromStr for CardView {
    type Err = UnknownCardView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(CardView::Info),
            "share" => Ok(CardView::Share),
            "nfc" => Ok(CardView::Nfc),
            _ => Err(UnknownCardView(s.to_string())),
        }
    }
}

/// Top of the card, identical in every view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub display_name: String,
    pub initial: char,
    pub title: Option<String>,
    pub company: Option<String>,
    pub profile_image: Option<String>,
}

/// One labelled line of the info view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRow {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
    /// Link opened when the row is activated (`mailto:`, `tel:`, ...).
    pub action: Option<String>,
}

/// A social link with its platform name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub label: &'static str,
    pub url: String,
}

/// Body of the info view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoSection {
    pub contact_rows: Vec<ContactRow>,
    pub socials: Vec<SocialLink>,
    pub identification_rows: Vec<ContactRow>,
    pub bank_accounts: Vec<BankAccount>,
    pub bio: Option<String>,
}

/// Body of the share view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSection {
    pub url: String,
    pub qr_svg: String,
    /// Text copied by the "copy contact info" action.
    pub summary: String,
}

/// Body of the NFC view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NfcSection {
    pub url: String,
    /// NDEF message to write to the tag.
    pub ndef_message: Vec<u8>,
    pub instructions: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "view")]
pub enum CardBody {
    Info(InfoSection),
    Share(ShareSection),
    Nfc(NfcSection),
}

/// A fully built card view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCard {
    pub mode: ViewMode,
    pub banner: Option<&'static str>,
    pub header: CardHeader,
    pub body: CardBody,
}

const NFC_INSTRUCTIONS: [&str; 3] = [
    "Open an NFC writer app on your phone.",
    "Add a URL record with the link above.",
    "Hold the tag against the back of the phone until it is written.",
];

/// First character of the name, uppercased, or the placeholder.
pub fn placeholder_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(PLACEHOLDER_INITIAL)
}

/// Builds one view of a card.
pub fn render_card(
    resolved: &ResolvedProfile,
    view: CardView,
    share_base_url: &str,
) -> Result<RenderedCard, ShareError> {
    let body = match view {
        CardView::Info => CardBody::Info(info_section(resolved)),
        CardView::Share => {
            let url = card_url(resolved, share_base_url);
            CardBody::Share(ShareSection {
                qr_svg: qr_svg(&url)?,
                summary: export_summary(resolved),
                url,
            })
        }
        CardView::Nfc => {
            let url = card_url(resolved, share_base_url);
            CardBody::Nfc(NfcSection {
                ndef_message: ndef_uri_record(&url)?,
                instructions: NFC_INSTRUCTIONS.to_vec(),
                url,
            })
        }
    };

    Ok(RenderedCard {
        mode: resolved.mode(),
        banner: resolved.mode().banner(),
        header: header(resolved),
        body,
    })
}

fn card_url(resolved: &ResolvedProfile, share_base_url: &str) -> String {
    share_url(
        share_base_url,
        resolved.profile().username.as_deref(),
        resolved.public_only(),
    )
}

fn header(resolved: &ResolvedProfile) -> CardHeader {
    let owned = |field: ProfileField| resolved.text(field).map(str::to_string);
    let name = resolved.profile().name.trim();

    CardHeader {
        display_name: name.to_string(),
        initial: placeholder_initial(name),
        title: owned(ProfileField::Title),
        company: owned(ProfileField::Company),
        profile_image: owned(ProfileField::ProfileImage),
    }
}

fn info_section(resolved: &ResolvedProfile) -> InfoSection {
    let row = |field: ProfileField| {
        resolved.text(field).map(|value| ContactRow {
            field,
            label: field.label(),
            value: value.to_string(),
            action: action_link(field, value),
        })
    };

    let contact_rows = [
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Address,
        ProfileField::Website,
    ]
    .into_iter()
    .filter_map(&row)
    .collect();

    let identification_rows = [ProfileField::IdentificationNumber, ProfileField::TaxNumber]
        .into_iter()
        .filter_map(&row)
        .collect();

    let socials = if resolved.is_visible(ProfileField::Socials) {
        resolved
            .profile()
            .socials
            .iter()
            .map(|(platform, url)| SocialLink {
                platform: *platform,
                label: platform.display_name(),
                url: url.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let bank_accounts = if resolved.is_visible(ProfileField::BankAccounts) {
        resolved.profile().bank_accounts.clone()
    } else {
        Vec::new()
    };

    InfoSection {
        contact_rows,
        socials,
        identification_rows,
        bank_accounts,
        bio: resolved.text(ProfileField::Bio).map(str::to_string),
    }
}

fn action_link(field: ProfileField, value: &str) -> Option<String> {
    match field {
        ProfileField::Email => Some(format!("mailto:{value}")),
        ProfileField::Phone => {
            let dial: String = value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            Some(format!("tel:{dial}"))
        }
        ProfileField::Website => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Some(value.to_string())
            } else {
                Some(format!("https://{value}"))
            }
        }
        _ => None,
    }
}
