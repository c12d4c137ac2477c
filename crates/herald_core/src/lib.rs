//! Core data types for the Herald publish workflow library.
//!
//! This crate provides the domain records shared across the workflow: the
//! platform enumeration, size presets and the catalog that registers them,
//! the design being published, caption suggestions, and the immutable
//! [`PublishRequest`] the workflow ultimately produces.

mod catalog;
mod design;
mod platform;
mod request;
mod size;
mod suggestion;

pub use catalog::{PlatformCatalog, SizePreset};
pub use design::{APPROVED_LABELS, Design, DesignBuilder, DesignBuilderError};
pub use platform::Platform;
pub use request::{PublishRequest, PublishRequestBuilder, PublishRequestBuilderError};
pub use size::{SizeChoice, SizeSpec};
pub use suggestion::{CaptionSuggestion, SuggestionScope};
