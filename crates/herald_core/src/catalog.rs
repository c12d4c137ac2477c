//! Static registry of per-platform size presets.

use crate::{Platform, SizeSpec};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One named entry in a platform's size menu.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct SizePreset {
    /// Variant key, the part after the dot in `instagram.feed`.
    variant: String,

    /// Pixel dimensions and menu label.
    spec: SizeSpec,
}

impl SizePreset {
    fn named(variant: &str, width: u32, height: u32, label: &str) -> Self {
        Self::new(variant.to_string(), SizeSpec::new(width, height, label.to_string()))
    }
}

/// Read-only registry mapping each platform to its named size presets.
///
/// Lookups never fail: a platform without presets (the website target) yields
/// an empty menu, not an error. Preset order within a platform is menu order.
///
/// # Examples
///
/// ```
/// use herald_core::{Platform, PlatformCatalog};
///
/// let catalog = PlatformCatalog::default();
/// assert!(!catalog.sizes_for(Platform::Instagram).is_empty());
/// assert!(catalog.sizes_for(Platform::Website).is_empty());
/// let feed = catalog.preset(Platform::Instagram, "feed").unwrap();
/// assert_eq!(*feed.spec().width(), 1080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCatalog {
    entries: Vec<(Platform, Vec<SizePreset>)>,
}

impl PlatformCatalog {
    /// Build a catalog from explicit entries, preserving their order.
    pub fn new(entries: Vec<(Platform, Vec<SizePreset>)>) -> Self {
        Self { entries }
    }

    /// The size menu for a platform, empty when it has no presets.
    pub fn sizes_for(&self, platform: Platform) -> &[SizePreset] {
        self.entries
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, presets)| presets.as_slice())
            .unwrap_or(&[])
    }

    /// Point lookup of one preset by platform and variant key.
    pub fn preset(&self, platform: Platform, variant: &str) -> Option<&SizePreset> {
        self.sizes_for(platform)
            .iter()
            .find(|preset| preset.variant() == variant)
    }

    /// Platforms that carry at least one preset, in catalog order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.entries
            .iter()
            .filter(|(_, presets)| !presets.is_empty())
            .map(|(platform, _)| *platform)
    }
}

impl Default for PlatformCatalog {
    /// The built-in catalog of recommended post dimensions.
    fn default() -> Self {
        Self::new(vec![
            (
                Platform::Facebook,
                vec![
                    SizePreset::named("post", 1200, 630, "Link post"),
                    SizePreset::named("story", 1080, 1920, "Story"),
                    SizePreset::named("cover", 820, 312, "Page cover"),
                ],
            ),
            (
                Platform::Instagram,
                vec![
                    SizePreset::named("feed", 1080, 1080, "Square feed post"),
                    SizePreset::named("portrait", 1080, 1350, "Portrait feed post"),
                    SizePreset::named("landscape", 1080, 566, "Landscape feed post"),
                    SizePreset::named("story", 1080, 1920, "Story"),
                ],
            ),
            (
                Platform::Twitter,
                vec![
                    SizePreset::named("post", 1200, 675, "Timeline post"),
                    SizePreset::named("header", 1500, 500, "Profile header"),
                ],
            ),
            (
                Platform::Linkedin,
                vec![
                    SizePreset::named("post", 1200, 627, "Feed post"),
                    SizePreset::named("cover", 1584, 396, "Company cover"),
                ],
            ),
            (
                Platform::Tiktok,
                vec![SizePreset::named("video", 1080, 1920, "Vertical video")],
            ),
            (
                Platform::Pinterest,
                vec![
                    SizePreset::named("pin", 1000, 1500, "Standard pin"),
                    SizePreset::named("square", 1000, 1000, "Square pin"),
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_has_no_size_menu() {
        let catalog = PlatformCatalog::default();
        assert!(catalog.sizes_for(Platform::Website).is_empty());
        assert!(catalog.preset(Platform::Website, "post").is_none());
    }

    #[test]
    fn preset_lookup_finds_known_variants() {
        let catalog = PlatformCatalog::default();
        let story = catalog.preset(Platform::Instagram, "story").unwrap();
        assert_eq!(*story.spec().width(), 1080);
        assert_eq!(*story.spec().height(), 1920);
    }

    #[test]
    fn preset_lookup_misses_unknown_variants() {
        let catalog = PlatformCatalog::default();
        assert!(catalog.preset(Platform::Instagram, "banner").is_none());
    }

    #[test]
    fn menu_order_is_stable() {
        let catalog = PlatformCatalog::default();
        let variants: Vec<&str> = catalog
            .sizes_for(Platform::Instagram)
            .iter()
            .map(|preset| preset.variant().as_str())
            .collect();
        assert_eq!(variants, vec!["feed", "portrait", "landscape", "story"]);
    }

    #[test]
    fn platforms_skips_empty_menus() {
        let catalog = PlatformCatalog::default();
        assert!(!catalog.platforms().any(|p| p == Platform::Website));
    }
}
