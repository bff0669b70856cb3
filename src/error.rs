//! Error types for the CareerBridge TUI.
//!
//! The session store itself has no failure path: every operation eventually
//! "succeeds" with canned data, and oversized uploads are dropped before the
//! store ever sees them. The only things that can actually fail are the
//! terminal and the log writer.

use thiserror::Error;

/// Errors the client can produce outside the session store.
#[derive(Debug, Error)]
pub enum CareerBridgeError {
    /// Terminal setup, drawing, or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Could not set up the log file writer.
    #[error("failed to initialize logging: {0}")]
    LogInit(String),
}

/// Convenience result alias for crate-level errors.
pub type Result<T> = std::result::Result<T, CareerBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_terminal() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CareerBridgeError = io_err.into();
        assert!(matches!(err, CareerBridgeError::Terminal(_)));
    }

    #[test]
    fn test_log_init_display() {
        let err = CareerBridgeError::LogInit("no data dir".to_string());
        assert_eq!(err.to_string(), "failed to initialize logging: no data dir");
    }
}
