//! Workflow error types.

/// Specific error conditions for publish workflow operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkflowErrorKind {
    /// No platform selected when one is required to proceed
    NoPlatformSelected,
    /// Size choice does not name a known variant for the active platform
    UnknownSizeVariant {
        /// Platform key the choice was validated against
        platform: String,
        /// The offending size choice
        choice: String,
    },
    /// Design category has not reached the approved state
    DesignNotApproved {
        /// Category label found on the design
        category: String,
    },
    /// Operation attempted after the workflow reached its terminal stage
    WorkflowClosed,
    /// Operation not available at the current workflow stage
    StageMismatch {
        /// Stage the workflow was in
        stage: String,
        /// Operation that was attempted
        operation: String,
    },
    /// Requested slot index is outside the configured slot table
    UnknownSlot(usize),
    /// Requested suggestion index is outside the generated list
    UnknownSuggestion(usize),
}

impl std::fmt::Display for WorkflowErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowErrorKind::NoPlatformSelected => {
                write!(f, "select at least one platform")
            }
            WorkflowErrorKind::UnknownSizeVariant { platform, choice } => {
                write!(f, "size '{}' is not a variant of platform '{}'", choice, platform)
            }
            WorkflowErrorKind::DesignNotApproved { category } => {
                write!(f, "design category '{}' is not approved for publishing", category)
            }
            WorkflowErrorKind::WorkflowClosed => {
                write!(f, "workflow already completed; open a new one to publish again")
            }
            WorkflowErrorKind::StageMismatch { stage, operation } => {
                write!(f, "operation '{}' is not available at stage '{}'", operation, stage)
            }
            WorkflowErrorKind::UnknownSlot(index) => {
                write!(f, "no suggested time slot at index {}", index)
            }
            WorkflowErrorKind::UnknownSuggestion(index) => {
                write!(f, "no caption suggestion at index {}", index)
            }
        }
    }
}

/// Error type for publish workflow operations.
///
/// # Examples
///
/// ```
/// use herald_error::{WorkflowError, WorkflowErrorKind};
///
/// let err = WorkflowError::new(WorkflowErrorKind::NoPlatformSelected);
/// assert!(format!("{}", err).contains("at least one platform"));
/// ```
#[derive(Debug, Clone)]
pub struct WorkflowError {
    /// The specific error condition
    pub kind: WorkflowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new WorkflowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workflow Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for WorkflowError {}
