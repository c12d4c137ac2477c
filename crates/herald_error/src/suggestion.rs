//! Suggestion service error types.

/// Caption suggestion error with source location.
///
/// Raised when a suggestion collaborator fails to produce captions. The
/// workflow treats this as non-fatal; the caption stage remains editable.
#[derive(Debug, Clone)]
pub struct SuggestionError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SuggestionError {
    /// Create a new SuggestionError with the given message at the current location.
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

impl std::fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Suggestion Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for SuggestionError {}
