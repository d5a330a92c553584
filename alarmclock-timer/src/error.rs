//! Error types for timer operations.

use alarmclock_events::RegistryError;
use thiserror::Error;

/// Result type for timer operations.
pub type TimerResult<T> = Result<T, TimerError>;

/// Timer-specific errors.
#[derive(Debug, Error)]
pub enum TimerError {
    /// `start` was called on a timer that already ran or is running
    #[error("Timer already started")]
    AlreadyStarted,

    /// `start` was called outside of a tokio runtime
    #[error("Timer must be started from within a tokio runtime")]
    NoRuntime,

    /// Subscription or publication failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Writing a tick indication failed
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    /// The countdown task panicked or was aborted
    #[error("Countdown task failed: {0}")]
    TaskFailed(String),

    /// Invalid timer configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
