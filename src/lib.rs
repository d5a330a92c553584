//! alarmclock - a countdown timer that notifies its observers
//!
//! A [`Timer`] ticks a fixed number of times on a background task and then
//! publishes the `"alarm"` event through its [`EventRegistry`]. Handlers
//! subscribed to that event print to the console or write a file.
//!
//! ```no_run
//! use alarmclock::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> AppResult<()> {
//! let config = AlarmConfig::load(None)?;
//! let app = App::build(&config, Console::stdout())?;
//! let outcome = app.run().await?;
//! assert!(outcome.fired());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod error;

pub use app::App;
pub use error::{AppError, AppResult};

pub use alarmclock_config::{AlarmConfig, ConfigError};
pub use alarmclock_events::{
    EventRegistry, EventRegistryBuilder, HandlerError, Notification, Observer, RegistryError,
    SourceId,
};
pub use alarmclock_handlers::{
    AlarmDispatch, AlarmHandler, ConsoleAlarm, FileAlarm, HandlerSet, ALARM_MESSAGE,
    HANDLING_PREFIX,
};
pub use alarmclock_log::Console;
pub use alarmclock_timer::{
    Timer, TimerBuilder, TimerConfig, TimerError, TimerHandle, TimerOutcome, ALARM_EVENT, TICK,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::App;
    pub use crate::error::{AppError, AppResult};
    pub use alarmclock_config::AlarmConfig;
    pub use alarmclock_events::{EventRegistry, HandlerError, Notification, Observer};
    pub use alarmclock_handlers::{AlarmHandler, ConsoleAlarm, FileAlarm, HandlerSet};
    pub use alarmclock_log::Console;
    pub use alarmclock_timer::{Timer, TimerHandle, TimerOutcome, ALARM_EVENT};
}
