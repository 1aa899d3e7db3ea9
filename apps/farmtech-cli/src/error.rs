//! # App Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in FarmTech                               │
//! │                                                                         │
//! │  Command Function ── Result<T, AppError>                                │
//! │         │                                                               │
//! │         ├── CoreError (OutOfRange, EmptyStore, ...)                     │
//! │         │       └─► shown to the operator, session continues            │
//! │         │                                                               │
//! │         ├── Io (terminal write failed)                                  │
//! │         │       └─► session ends with an error                          │
//! │         │                                                               │
//! │         └── InputClosed (stdin reached EOF)                             │
//! │                 └─► session ends normally                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use farmtech_core::CoreError;
use thiserror::Error;

/// Errors raised by the menu layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record store operation was rejected.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Input stream closed while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_recoverable() {
        let err: AppError = CoreError::EmptyStore.into();
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "No records registered");
    }

    #[test]
    fn test_io_and_eof_end_the_session() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert!(!err.is_recoverable());
        assert!(!AppError::InputClosed.is_recoverable());
    }
}
