//! Caption suggestions and their platform scope.

use crate::Platform;
use derive_getters::Getters;
use herald_error::SuggestionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which platforms a caption suggestion is written for.
///
/// Serializes as `"all"` or a platform key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SuggestionScope {
    /// Suitable for every selected platform.
    All,
    /// Tailored to one platform's tone and limits.
    Platform(Platform),
}

impl SuggestionScope {
    /// Whether a suggestion with this scope fits the given platform.
    pub fn applies_to(&self, platform: Platform) -> bool {
        match self {
            SuggestionScope::All => true,
            SuggestionScope::Platform(p) => *p == platform,
        }
    }
}

impl std::fmt::Display for SuggestionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionScope::All => write!(f, "all"),
            SuggestionScope::Platform(p) => write!(f, "{}", p.as_str()),
        }
    }
}

impl FromStr for SuggestionScope {
    type Err = SuggestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SuggestionScope::All);
        }
        Platform::from_str(s)
            .map(SuggestionScope::Platform)
            .map_err(|_| SuggestionError::new(format!("unknown suggestion scope '{}'", s)))
    }
}

impl From<SuggestionScope> for String {
    fn from(scope: SuggestionScope) -> Self {
        scope.to_string()
    }
}

impl TryFrom<String> for SuggestionScope {
    type Error = SuggestionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SuggestionScope::from_str(&value)
    }
}

/// One generated caption, tagged with the platforms it targets.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct CaptionSuggestion {
    /// Suggested caption text.
    text: String,

    /// Platform scope of the suggestion.
    scope: SuggestionScope,
}

impl CaptionSuggestion {
    /// Whether this suggestion fits the given platform.
    pub fn applies_to(&self, platform: Platform) -> bool {
        self.scope.applies_to(platform)
    }
}
