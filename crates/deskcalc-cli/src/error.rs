//! Error types for the CLI

use deskcalc::core::WidgetError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Script or key input the widgets do not understand
    #[error("Invalid input: {0}")]
    Widget(#[from] WidgetError),

    /// IO error (terminal or stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_error_conversion() {
        let err: CliError = WidgetError::UnknownKey('^').into();
        assert_eq!(err.to_string(), "Invalid input: unknown key '^'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CliError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_invalid_argument() {
        let err = CliError::invalid_argument("interactive mode needs a terminal");
        assert_eq!(
            err.to_string(),
            "Invalid argument: interactive mode needs a terminal"
        );
    }
}
