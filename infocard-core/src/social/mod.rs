// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Platforms
//!
//! The fixed set of social networks a profile may link to, with display
//! names and profile URL templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A social platform supported on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    GitHub,
    Instagram,
}

/// Unknown platform identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown social platform: {0}")]
pub struct UnknownPlatform(pub String);

impl SocialPlatform {
    /// All platforms, in display order.
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::GitHub,
        SocialPlatform::Instagram,
    ];

    /// Lowercase identifier used as the JSON key.
    pub fn id(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::GitHub => "github",
            SocialPlatform::Instagram => "instagram",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Instagram => "Instagram",
        }
    }

    /// URL template with `{username}` placeholder.
    pub fn profile_url_template(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "https://linkedin.com/in/{username}",
            SocialPlatform::Twitter => "https://twitter.com/{username}",
            SocialPlatform::GitHub => "https://github.com/{username}",
            SocialPlatform::Instagram => "https://instagram.com/{username}",
        }
    }

    /// Turns a handle or a full URL into a profile URL.
    ///
    /// Full URLs are kept as-is; a leading `@` is dropped for Twitter and
    /// Instagram handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use infocard_core::social::SocialPlatform;
    ///
    /// let twitter = SocialPlatform::Twitter;
    /// assert_eq!(twitter.profile_url("@ada"), "https://twitter.com/ada");
    /// assert_eq!(
    ///     twitter.profile_url("https://twitter.com/ada"),
    ///     "https://twitter.com/ada"
    /// );
    /// ```
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.trim();
        if handle.starts_with("http://") || handle.starts_with("https://") {
            return handle.to_string();
        }

        let handle = match self {
            SocialPlatform::Twitter | SocialPlatform::Instagram => {
                handle.strip_prefix('@').unwrap_or(handle)
            }
            _ => handle,
        };

        self.profile_url_template().replace("{username}", handle)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.id() == lower)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_from_handle() {
        assert_eq!(
            SocialPlatform::GitHub.profile_url("ada"),
            "https://github.com/ada"
        );
        assert_eq!(
            SocialPlatform::Instagram.profile_url(" @ada "),
            "https://instagram.com/ada"
        );
    }

    #[test]
    fn test_at_prefix_kept_for_linkedin() {
        assert_eq!(
            SocialPlatform::LinkedIn.profile_url("@ada"),
            "https://linkedin.com/in/@ada"
        );
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("GitHub".parse::<SocialPlatform>(), Ok(SocialPlatform::GitHub));
        assert!("myspace".parse::<SocialPlatform>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&SocialPlatform::LinkedIn).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
