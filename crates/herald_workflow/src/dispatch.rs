//! The dispatch seam: where a finished publish request leaves the workflow.

use async_trait::async_trait;
use derive_getters::Getters;
use herald_core::{Design, PublishRequest};
use herald_error::HeraldResult;
use serde::{Deserialize, Serialize};

/// Platform-assigned identifier for a published post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);

/// Identifier for a deferred publish registered with a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct ScheduleId(pub String);

/// What the dispatcher reports back for one accepted request.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct DispatchReceipt {
    /// One post id per immediately published platform.
    #[serde(default)]
    post_ids: Vec<PostId>,

    /// Set when the request was deferred to a scheduler instead.
    #[serde(default)]
    schedule_id: Option<ScheduleId>,
}

/// Downstream consumer of finished publish requests.
///
/// Transport, credentials, and retry policy all live behind this trait; the
/// workflow only builds the request and hands it over. A failed dispatch
/// leaves the request snapshot intact, so callers may retry with the same
/// payload.
#[async_trait]
pub trait PublishDispatcher: Send + Sync {
    /// Accept a finished publish request.
    ///
    /// # Errors
    ///
    /// Returns error if the downstream channel rejects the request.
    async fn dispatch(&self, request: &PublishRequest) -> HeraldResult<DispatchReceipt>;

    /// Observe a workflow being abandoned before publishing.
    ///
    /// # Errors
    ///
    /// Returns error if the observer fails; the workflow discards its state
    /// either way.
    async fn cancelled(&self, design: &Design) -> HeraldResult<()> {
        let _ = design;
        Ok(())
    }
}
