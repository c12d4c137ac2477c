//! Error types for the Herald library.
//!
//! This crate provides the foundation error types used throughout the Herald
//! publish workflow: per-domain errors carrying their source location, the
//! crate-level [`HeraldErrorKind`] discriminator, and the [`HeraldResult`]
//! alias the rest of the workspace returns.

mod config;
mod dispatch;
mod suggestion;
mod workflow;

pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use suggestion::SuggestionError;
pub use workflow::{WorkflowError, WorkflowErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum HeraldErrorKind {
    /// Publish workflow validation or sequencing error
    Workflow(WorkflowError),
    /// Caption suggestion collaborator error
    Suggestion(SuggestionError),
    /// Publish dispatch collaborator error
    Dispatch(DispatchError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for HeraldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeraldErrorKind::Workflow(e) => write!(f, "{}", e),
            HeraldErrorKind::Suggestion(e) => write!(f, "{}", e),
            HeraldErrorKind::Dispatch(e) => write!(f, "{}", e),
            HeraldErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Herald error with kind discrimination.
#[derive(Debug)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }
}

impl std::fmt::Display for HeraldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Herald Error: {}", self.0)
    }
}

impl std::error::Error for HeraldError {}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;
