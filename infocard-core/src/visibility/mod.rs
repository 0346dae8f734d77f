// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visibility Resolver
//!
//! Decides which profile fields a viewer gets to see. Every consumer
//! (card rendering, vCard and summary export, the HTTP API) goes through
//! [`resolve`]; nothing else re-derives the public/private split.

mod device;

pub use device::{DeviceClass, UnknownDevice, MOBILE_MAX_WIDTH};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::profile::{ContactProfile, ProfileField};

/// Static privacy class of a profile field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPrivacy {
    /// Shown in every view.
    Public,
    /// Suppressed when the card is rendered public-only.
    Private,
}

impl ProfileField {
    /// Privacy class of the field. Fixed, not data-driven.
    pub fn privacy(&self) -> FieldPrivacy {
        match self {
            ProfileField::Email
            | ProfileField::Phone
            | ProfileField::Address
            | ProfileField::IdentificationNumber
            | ProfileField::TaxNumber
            | ProfileField::BankAccounts => FieldPrivacy::Private,
            ProfileField::Name
            | ProfileField::Title
            | ProfileField::Company
            | ProfileField::Website
            | ProfileField::Bio
            | ProfileField::ProfileImage
            | ProfileField::Socials => FieldPrivacy::Public,
        }
    }

    pub fn is_private(&self) -> bool {
        self.privacy() == FieldPrivacy::Private
    }
}

/// View asked for by the visitor (`?view=public`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedView {
    #[default]
    Private,
    Public,
}

/// Unknown view name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown view: {0} (expected public or private)")]
pub struct UnknownView(pub String);

impl RequestedView {
    /// Reads the `view` query parameter. Anything other than `public`
    /// falls back to the default view.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("public") => RequestedView::Public,
            _ => RequestedView::Private,
        }
    }
}

impl fmt::Display for RequestedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedView::Private => f.write_str("private"),
            RequestedView::Public => f.write_str("public"),
        }
    }
}

impl FromStr for RequestedView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(RequestedView::Public),
            "private" => Ok(RequestedView::Private),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}

/// Display tag for a resolved card. Never changes the field set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Signed-in owner, everything shown.
    Owner,
    /// Signed-in owner looking at what the public sees.
    Preview,
    /// Anonymous visitor, public fields only.
    Public,
    /// Anonymous visitor given the full card (default view, or a mobile tap).
    Full,
}

impl ViewMode {
    /// Banner text shown above the card, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            ViewMode::Owner => None,
            ViewMode::Preview => {
                Some("Preview: this is how your card looks to the public. Private details are hidden.")
            }
            ViewMode::Public => Some("Public view: private details are hidden."),
            ViewMode::Full => None,
        }
    }
}

/// Output of the resolver: the profile with every field the viewer may not
/// see removed, plus the flags it was derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    profile: ContactProfile,
    public_only: bool,
    mode: ViewMode,
}

impl ResolvedProfile {
    /// The gated profile.
    pub fn profile(&self) -> &ContactProfile {
        &self.profile
    }

    /// Consumes the resolution, returning the gated profile.
    pub fn into_profile(self) -> ContactProfile {
        self.profile
    }

    /// True when private fields were suppressed.
    pub fn public_only(&self) -> bool {
        self.public_only
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns true if the field may be shown in this resolution.
    pub fn is_visible(&self, field: ProfileField) -> bool {
        !(self.public_only && field.is_private())
    }

    /// Fields that are both visible and filled in, in card order.
    pub fn visible_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| self.is_visible(*f) && self.profile.has_value(*f))
            .collect()
    }

    /// Value of a visible text field.
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        if self.is_visible(field) {
            self.profile.text(field)
        } else {
            None
        }
    }
}

/// Computes the effective `public_only` flag.
///
/// Mobile always gets the full card: a tap on an NFC tag or QR code is
/// taken to come from the owner's own phone. On desktop an explicit public
/// request hides private fields, for visitors and for the owner alike; the
/// owner's case is tagged as a preview. Signing in does not change the
/// outcome, so the session is not an input here.
pub fn is_public_only(requested: RequestedView, device: DeviceClass) -> bool {
    match device {
        DeviceClass::Mobile => false,
        DeviceClass::Desktop => requested == RequestedView::Public,
    }
}

/// Resolves what a viewer sees of a profile.
pub fn resolve(
    profile: &ContactProfile,
    is_authenticated: bool,
    requested: RequestedView,
    device: DeviceClass,
) -> ResolvedProfile {
    let public_only = is_public_only(requested, device);

    let mode = match (is_authenticated, public_only) {
        (true, false) => ViewMode::Owner,
        (true, true) => ViewMode::Preview,
        (false, true) => ViewMode::Public,
        (false, false) => ViewMode::Full,
    };

    let mut gated = profile.clone();
    if public_only {
        for field in ProfileField::ALL.into_iter().filter(ProfileField::is_private) {
            gated.clear(field);
        }
    }

    ResolvedProfile {
        profile: gated,
        public_only,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_classification() {
        let private: Vec<_> = ProfileField::ALL
            .into_iter()
            .filter(ProfileField::is_private)
            .collect();
        assert_eq!(
            private,
            vec![
                ProfileField::Email,
                ProfileField::Phone,
                ProfileField::Address,
                ProfileField::IdentificationNumber,
                ProfileField::TaxNumber,
                ProfileField::BankAccounts,
            ]
        );
    }

    #[test]
    fn test_public_only_truth_table() {
        use DeviceClass::*;
        use RequestedView::*;

        assert!(!is_public_only(Private, Desktop));
        assert!(is_public_only(Public, Desktop));
        assert!(!is_public_only(Private, Mobile));
        assert!(!is_public_only(Public, Mobile));
    }

    #[test]
    fn test_view_from_query() {
        assert_eq!(RequestedView::from_query(Some("public")), RequestedView::Public);
        assert_eq!(RequestedView::from_query(Some("PUBLIC")), RequestedView::Public);
        assert_eq!(RequestedView::from_query(Some("other")), RequestedView::Private);
        assert_eq!(RequestedView::from_query(None), RequestedView::Private);
    }

    #[test]
    fn test_mode_tags() {
        let profile = ContactProfile::new("Ada");
        let mode = |auth, view, device| resolve(&profile, auth, view, device).mode();

        assert_eq!(mode(true, RequestedView::Private, DeviceClass::Desktop), ViewMode::Owner);
        assert_eq!(mode(true, RequestedView::Public, DeviceClass::Desktop), ViewMode::Preview);
        assert_eq!(mode(false, RequestedView::Public, DeviceClass::Desktop), ViewMode::Public);
        assert_eq!(mode(false, RequestedView::Public, DeviceClass::Mobile), ViewMode::Full);
    }

    #[test]
    fn test_preview_banner_differs_from_public() {
        assert_ne!(ViewMode::Preview.banner(), ViewMode::Public.banner());
        assert!(ViewMode::Owner.banner().is_none());
    }
}
