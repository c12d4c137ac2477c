//! Publish workflow state machine for social content.
//!
//! This crate sequences an approved design through the publish stages and
//! emits one immutable [`herald_core::PublishRequest`] at the end. The
//! pieces compose around [`PublishWorkflowController`]:
//!
//! 1. **Selection** - typed platform selection for single and multi flows
//! 2. **Size policy** - per-platform defaults and catalog validation
//! 3. **Draft** - caption under the character cap, link, applied suggestion
//! 4. **Scheduling** - immediate vs scheduled, optimal time, fixed slots
//! 5. **Suggestions** - async caption generation behind staleness tickets
//! 6. **Dispatch** - the trait seam a finished request leaves through
//!
//! Everything time-dependent takes `now` from the caller and everything
//! external sits behind an async trait, so the whole workflow runs
//! deterministically under test.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod dispatch;
mod draft;
mod scheduling;
mod selection;
mod size_policy;
mod suggest;
mod trends;

pub use controller::{FlowMode, PublishWorkflowController, WorkflowStage};
pub use dispatch::{DispatchReceipt, PostId, PublishDispatcher, ScheduleId};
pub use draft::{CAPTION_MAX, ContentDraft};
pub use scheduling::{
    ScheduleChoice, SchedulingConfig, SchedulingPolicy, TimeSlot, format_hhmm,
};
pub use selection::{PlatformSelection, PlatformSet};
pub use size_policy::{CROP_RISK_WARNING, SizeSelectionPolicy};
pub use suggest::{
    SuggestionPrompt, SuggestionSource, SuggestionTicket, TemplatedSuggestionSource,
};
pub use trends::{StaticTrendSource, TrendSource};
