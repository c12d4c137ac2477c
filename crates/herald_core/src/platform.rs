//! Social platform identifiers.

use serde::{Deserialize, Serialize};

/// Target platforms for a publish request.
///
/// The set is fixed. Platform identity is a typed variant, never a bare
/// string key, so a typo cannot produce a phantom platform downstream.
/// Declaration order is presentation order: multi-platform flows treat the
/// first enabled platform in this order as the primary one.
///
/// # Examples
///
/// ```
/// use herald_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::Instagram.as_str(), "instagram");
/// assert_eq!(Platform::from_str("tiktok").ok(), Some(Platform::Tiktok));
/// assert!(Platform::from_str("myspace").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Facebook page posts
    Facebook,
    /// Instagram feed and stories
    Instagram,
    /// Twitter timeline posts
    Twitter,
    /// LinkedIn company posts
    Linkedin,
    /// The customer's own website
    Website,
    /// TikTok vertical video
    Tiktok,
    /// Pinterest pins
    Pinterest,
}

impl Platform {
    /// Stable lowercase key used in size identifiers and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Website => "website",
            Platform::Tiktok => "tiktok",
            Platform::Pinterest => "pinterest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_key() {
        for platform in Platform::iter() {
            assert_eq!(platform.to_string(), platform.as_str());
        }
    }

    #[test]
    fn keys_round_trip_through_parse() {
        use std::str::FromStr;
        for platform in Platform::iter() {
            assert_eq!(Platform::from_str(platform.as_str()).ok(), Some(platform));
        }
    }
}
