//! The design record a workflow publishes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Category labels that mark a design as cleared for publishing.
///
/// The review pipeline writes either the English or the Arabic label
/// depending on the reviewer's locale; both mean approved.
pub const APPROVED_LABELS: [&str; 2] = ["approved", "معتمد"];

/// A design as handed to the publish workflow.
///
/// Read-only input from the caller's catalog; the workflow never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
pub struct Design {
    /// Stable identifier in the caller's catalog.
    id: i64,

    /// Title shown in the editor and echoed into the publish payload.
    title: String,

    /// Lifecycle category label, e.g. `approved` or a pending state.
    category: String,

    /// Reference to the rendered artwork (URL or storage key).
    #[builder(default)]
    #[serde(default)]
    image_ref: String,

    /// Name of the designer, used when drafting captions.
    #[builder(default)]
    #[serde(default)]
    author: String,

    /// Engagement counters from the gallery.
    #[builder(default)]
    #[serde(default)]
    likes_count: i64,

    /// Comment counter from the gallery.
    #[builder(default)]
    #[serde(default)]
    comments_count: i64,
}

impl Design {
    /// Whether the design's category clears it for publishing.
    pub fn is_approved(&self) -> bool {
        APPROVED_LABELS.contains(&self.category.as_str())
    }
}
