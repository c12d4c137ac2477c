//! The immutable publish request handed to the dispatcher.

use crate::{Platform, SizeChoice};
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Terminal artifact of a publish workflow.
///
/// Built once when the workflow completes and never mutated afterward;
/// downstream transport, retries, and persistence all work from this one
/// snapshot. Field names serialize in the camelCase form the dispatch
/// contract expects.
///
/// `scheduled == false` implies `date` and `time` are `None`; the scheduling
/// policy enforces this when the snapshot is built. `time` is a zero-padded
/// `HH:MM` string.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Getters,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    /// Identifier of the published design.
    design_id: i64,

    /// Title of the published design.
    design_title: String,

    /// Every platform the request targets; order follows the selection.
    platforms: Vec<Platform>,

    /// Final caption text, possibly empty.
    #[builder(default)]
    #[serde(default)]
    caption: String,

    /// Whether to publish at a scheduled moment rather than immediately.
    scheduled: bool,

    /// Calendar date for a scheduled publish.
    #[builder(default)]
    #[serde(default)]
    date: Option<NaiveDate>,

    /// Wall-clock time for a scheduled publish, zero-padded `HH:MM`.
    #[builder(default)]
    #[serde(default)]
    time: Option<String>,

    /// Optional call-to-action link.
    #[builder(default)]
    #[serde(default)]
    link_url: Option<String>,

    /// Selected output size.
    size: SizeChoice,

    /// Whether the dispatcher may resize the artwork per platform.
    auto_resize: bool,
}
