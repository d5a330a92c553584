//! Error types for the alarmclock application.

use alarmclock_config::ConfigError;
use alarmclock_events::RegistryError;
use alarmclock_timer::TimerError;
use thiserror::Error;

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Wiring handlers to the timer failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The countdown could not start or a handler failed
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Registry(_) | AppError::Timer(_) => 1,
        }
    }
}
