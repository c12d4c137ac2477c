//! Dispatch error types.

/// Publish dispatch error with source location.
///
/// Raised when the downstream dispatcher rejects a publish request. The
/// request snapshot stays available, so callers may retry with the same
/// payload.
#[derive(Debug, Clone)]
pub struct DispatchError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DispatchError {
    /// Create a new DispatchError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dispatch Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for DispatchError {}
