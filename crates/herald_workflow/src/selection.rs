//! Platform selection state for single and multi-platform flows.

use herald_core::Platform;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Fixed-field record of which platforms are enabled.
///
/// One boolean per platform, so an unknown platform key cannot exist here.
/// Enumeration order follows [`Platform`] declaration order, which is also
/// presentation order in the share dialog.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct PlatformSet {
    /// Facebook enabled
    #[serde(default)]
    #[new(default)]
    facebook: bool,

    /// Instagram enabled
    #[serde(default)]
    #[new(default)]
    instagram: bool,

    /// Twitter enabled
    #[serde(default)]
    #[new(default)]
    twitter: bool,

    /// LinkedIn enabled
    #[serde(default)]
    #[new(default)]
    linkedin: bool,

    /// Website enabled
    #[serde(default)]
    #[new(default)]
    website: bool,

    /// TikTok enabled
    #[serde(default)]
    #[new(default)]
    tiktok: bool,

    /// Pinterest enabled
    #[serde(default)]
    #[new(default)]
    pinterest: bool,
}

impl PlatformSet {
    /// Whether the given platform is enabled.
    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::Twitter => self.twitter,
            Platform::Linkedin => self.linkedin,
            Platform::Website => self.website,
            Platform::Tiktok => self.tiktok,
            Platform::Pinterest => self.pinterest,
        }
    }

    /// Set one platform's flag.
    pub fn set(&mut self, platform: Platform, enabled: bool) {
        match platform {
            Platform::Facebook => self.facebook = enabled,
            Platform::Instagram => self.instagram = enabled,
            Platform::Twitter => self.twitter = enabled,
            Platform::Linkedin => self.linkedin = enabled,
            Platform::Website => self.website = enabled,
            Platform::Tiktok => self.tiktok = enabled,
            Platform::Pinterest => self.pinterest = enabled,
        }
    }

    /// Flip one platform's flag.
    pub fn toggle(&mut self, platform: Platform) {
        self.set(platform, !self.is_enabled(platform));
    }

    /// Enabled platforms in presentation order.
    pub fn enabled(&self) -> Vec<Platform> {
        Platform::iter().filter(|p| self.is_enabled(*p)).collect()
    }

    /// Whether any platform is enabled.
    pub fn any(&self) -> bool {
        Platform::iter().any(|p| self.is_enabled(p))
    }
}

/// Platform selection state, shaped by the flow the workflow runs in.
///
/// The single-platform flow is a radio choice: picking a platform replaces
/// any previous pick. The multi-platform flow is a checkbox set. Both expose
/// the same queries, so the controller does not branch on the flow for
/// gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformSelection {
    /// Radio-style choice of at most one platform.
    Single(Option<Platform>),
    /// Checkbox set of any number of platforms.
    Multi(PlatformSet),
}

impl PlatformSelection {
    /// Empty single-platform selection.
    pub fn single() -> Self {
        PlatformSelection::Single(None)
    }

    /// Empty multi-platform selection.
    pub fn multi() -> Self {
        PlatformSelection::Multi(PlatformSet::default())
    }

    /// Select a platform. Single flows replace the previous pick; multi
    /// flows enable the platform alongside existing picks.
    pub fn select(&mut self, platform: Platform) {
        match self {
            PlatformSelection::Single(current) => *current = Some(platform),
            PlatformSelection::Multi(set) => set.set(platform, true),
        }
    }

    /// Flip a platform. Single flows treat this as select.
    pub fn toggle(&mut self, platform: Platform) {
        match self {
            PlatformSelection::Single(current) => *current = Some(platform),
            PlatformSelection::Multi(set) => set.toggle(platform),
        }
    }

    /// Every selected platform in presentation order.
    pub fn selected(&self) -> Vec<Platform> {
        match self {
            PlatformSelection::Single(current) => current.iter().copied().collect(),
            PlatformSelection::Multi(set) => set.enabled(),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            PlatformSelection::Single(current) => current.is_none(),
            PlatformSelection::Multi(set) => !set.any(),
        }
    }

    /// The platform that drives size defaults and validation.
    ///
    /// Single flows return the pick; multi flows return the first enabled
    /// platform in presentation order.
    pub fn primary(&self) -> Option<Platform> {
        match self {
            PlatformSelection::Single(current) => *current,
            PlatformSelection::Multi(set) => set.enabled().first().copied(),
        }
    }

    /// Whether the given platform is selected.
    pub fn contains(&self, platform: Platform) -> bool {
        match self {
            PlatformSelection::Single(current) => *current == Some(platform),
            PlatformSelection::Multi(set) => set.is_enabled(platform),
        }
    }
}
