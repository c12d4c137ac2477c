//! Publish workflow engine for social content.
//!
//! Herald takes an approved design through platform selection, size
//! configuration, caption editing with generated suggestions, and
//! scheduling, and hands one immutable [`PublishRequest`] to a
//! [`PublishDispatcher`]. This crate is the facade: it re-exports the
//! workspace API and adds configuration loading and the
//! [`PublishSession`] wiring.
//!
//! ```no_run
//! use herald::{
//!     DesignBuilder, HeraldConfig, Platform, PublishSession, StaticTrendSource,
//!     TemplatedSuggestionSource,
//! };
//! # use herald::{DispatchReceipt, HeraldResult, PublishDispatcher, PublishRequest};
//! # struct NullDispatcher;
//! # #[async_trait::async_trait]
//! # impl PublishDispatcher for NullDispatcher {
//! #     async fn dispatch(&self, _: &PublishRequest) -> HeraldResult<DispatchReceipt> {
//! #         Ok(DispatchReceipt::default())
//! #     }
//! # }
//!
//! # async fn demo() -> HeraldResult<()> {
//! let design = DesignBuilder::default()
//!     .id(7)
//!     .title("Summer launch".to_string())
//!     .category("approved".to_string())
//!     .build()
//!     .expect("design fields set");
//! let config = HeraldConfig::default();
//! let mut session = PublishSession::open(
//!     design,
//!     &config,
//!     NullDispatcher,
//!     TemplatedSuggestionSource::immediate(),
//!     StaticTrendSource::default(),
//! )
//! .await?;
//! session.controller_mut().select_platform(Platform::Instagram)?;
//! session.publish(chrono::Utc::now()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod observe;
mod session;

pub use config::HeraldConfig;
pub use observe::init_tracing;
pub use session::PublishSession;

pub use herald_core::{
    APPROVED_LABELS, CaptionSuggestion, Design, DesignBuilder, Platform, PlatformCatalog,
    PublishRequest, PublishRequestBuilder, SizeChoice, SizePreset, SizeSpec, SuggestionScope,
};
pub use herald_error::{
    ConfigError, DispatchError, HeraldError, HeraldErrorKind, HeraldResult, SuggestionError,
    WorkflowError, WorkflowErrorKind,
};
pub use herald_workflow::{
    CAPTION_MAX, CROP_RISK_WARNING, ContentDraft, DispatchReceipt, FlowMode, PlatformSelection,
    PlatformSet, PostId, PublishDispatcher, PublishWorkflowController, ScheduleChoice, ScheduleId,
    SchedulingConfig, SchedulingPolicy, SizeSelectionPolicy, StaticTrendSource, SuggestionPrompt,
    SuggestionSource, SuggestionTicket, TemplatedSuggestionSource, TimeSlot, TrendSource,
    WorkflowStage,
};
