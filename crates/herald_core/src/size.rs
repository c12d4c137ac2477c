//! Size dimensions and the publish size choice.

use crate::Platform;
use derive_getters::Getters;
use herald_error::{WorkflowError, WorkflowErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pixel dimensions for one named size preset.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct SizeSpec {
    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,

    /// Human-readable label shown in size menus.
    label: String,
}

/// The size selected for a publish request.
///
/// Either the `default` sentinel (publish the design at its native size) or
/// a `<platform>.<variant>` preset from the catalog. Serializes as that
/// string, which is the form the dispatch payload carries.
///
/// # Examples
///
/// ```
/// use herald_core::{Platform, SizeChoice};
/// use std::str::FromStr;
///
/// let choice = SizeChoice::from_str("instagram.feed").unwrap();
/// assert_eq!(choice.to_string(), "instagram.feed");
/// assert_eq!(SizeChoice::Default.to_string(), "default");
/// assert!(SizeChoice::from_str("myspace.feed").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SizeChoice {
    /// Publish at the design's native size.
    Default,
    /// A named preset from the platform catalog.
    Preset {
        /// Platform the preset belongs to.
        platform: Platform,
        /// Variant key within that platform's menu.
        variant: String,
    },
}

impl SizeChoice {
    /// Build a preset choice from a platform and variant key.
    pub fn preset(platform: Platform, variant: impl Into<String>) -> Self {
        SizeChoice::Preset {
            platform,
            variant: variant.into(),
        }
    }

    /// Whether this is the `default` sentinel.
    pub fn is_default(&self) -> bool {
        matches!(self, SizeChoice::Default)
    }
}

impl std::fmt::Display for SizeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeChoice::Default => write!(f, "default"),
            SizeChoice::Preset { platform, variant } => {
                write!(f, "{}.{}", platform.as_str(), variant)
            }
        }
    }
}

impl FromStr for SizeChoice {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(SizeChoice::Default);
        }
        let unknown = || {
            let prefix = s.split_once('.').map(|(p, _)| p).unwrap_or(s);
            WorkflowError::new(WorkflowErrorKind::UnknownSizeVariant {
                platform: prefix.to_string(),
                choice: s.to_string(),
            })
        };
        let (prefix, variant) = s.split_once('.').ok_or_else(unknown)?;
        let platform = Platform::from_str(prefix).map_err(|_| unknown())?;
        if variant.is_empty() {
            return Err(unknown());
        }
        Ok(SizeChoice::Preset {
            platform,
            variant: variant.to_string(),
        })
    }
}

impl From<SizeChoice> for String {
    fn from(choice: SizeChoice) -> Self {
        choice.to_string()
    }
}

impl TryFrom<String> for SizeChoice {
    type Error = WorkflowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SizeChoice::from_str(&value)
    }
}
