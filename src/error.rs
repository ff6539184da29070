//! Error types for testselect

use thiserror::Error;

/// Result type alias for testselect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for testselect operations
#[derive(Error, Debug)]
pub enum Error {
    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// No console launcher jar could be located
    #[error("No console launcher jar found under {search_root}")]
    LauncherNotFound { search_root: String },

    /// The platform invocation itself failed (distinct from failing tests)
    #[error("Platform invocation '{invocation}' failed: {message}")]
    Platform { invocation: String, message: String },

    /// The platform produced output we could not interpret as a summary
    #[error("Unreadable platform summary: {message}")]
    SummaryParse { message: String },
}

impl Error {
    /// Create a platform fault error
    pub fn platform(invocation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Platform {
            invocation: invocation.into(),
            message: message.into(),
        }
    }

    /// Create a summary parse error
    pub fn summary_parse(message: impl Into<String>) -> Self {
        Error::SummaryParse {
            message: message.into(),
        }
    }
}
