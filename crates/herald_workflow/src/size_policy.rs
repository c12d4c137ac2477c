//! Size defaults and validation for the configuration stage.

use herald_core::{Platform, PlatformCatalog, SizeChoice};
use herald_error::{WorkflowError, WorkflowErrorKind};

/// Warning surfaced when automatic resizing is turned off.
///
/// Non-blocking: the user may keep auto-resize off, the dispatcher will then
/// publish the artwork at the selected size everywhere.
pub const CROP_RISK_WARNING: &str =
    "disabling automatic resizing may crop the design on platforms with different dimensions";

/// Decides default sizes and validates size choices against the catalog.
#[derive(Debug, Clone, Default)]
pub struct SizeSelectionPolicy {
    catalog: PlatformCatalog,
}

impl SizeSelectionPolicy {
    /// Build a policy over the given catalog.
    pub fn new(catalog: PlatformCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this policy validates against.
    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    /// The size preselected when a platform becomes active.
    ///
    /// Platforms without presets fall back to the `default` sentinel.
    pub fn default_size_for(&self, platform: Platform) -> SizeChoice {
        match platform {
            Platform::Facebook => SizeChoice::preset(platform, "post"),
            Platform::Instagram => SizeChoice::preset(platform, "feed"),
            Platform::Twitter => SizeChoice::preset(platform, "post"),
            Platform::Linkedin => SizeChoice::preset(platform, "post"),
            Platform::Tiktok => SizeChoice::preset(platform, "video"),
            Platform::Pinterest => SizeChoice::preset(platform, "pin"),
            Platform::Website => SizeChoice::Default,
        }
    }

    /// Whether a choice is acceptable for the active platform.
    ///
    /// The `default` sentinel always passes. A preset passes only when it
    /// belongs to the active platform and names a variant in that platform's
    /// menu.
    pub fn is_valid(&self, active: Platform, choice: &SizeChoice) -> bool {
        match choice {
            SizeChoice::Default => true,
            SizeChoice::Preset { platform, variant } => {
                *platform == active && self.catalog.preset(active, variant).is_some()
            }
        }
    }

    /// Validate a choice, reporting the offending choice on failure.
    pub fn validate(&self, active: Platform, choice: &SizeChoice) -> Result<(), WorkflowError> {
        if self.is_valid(active, choice) {
            return Ok(());
        }
        Err(WorkflowError::new(WorkflowErrorKind::UnknownSizeVariant {
            platform: active.as_str().to_string(),
            choice: choice.to_string(),
        }))
    }

    /// The crop-risk warning when auto-resize is disabled, `None` otherwise.
    pub fn crop_warning(&self, auto_resize: bool) -> Option<&'static str> {
        if auto_resize { None } else { Some(CROP_RISK_WARNING) }
    }
}
