//! Countdown timer for alarmclock.
//!
//! A [`Timer`] writes a tick indication to its console once per interval,
//! on a background task, and publishes the `"alarm"` event through its
//! embedded [`EventRegistry`](alarmclock_events::EventRegistry) after the
//! last tick.
//!
//! ## Complete Example
//!
//! ```no_run
//! use alarmclock_events::{HandlerError, Notification, Observer};
//! use alarmclock_timer::*;
//! use async_trait::async_trait;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Wake;
//!
//! #[async_trait]
//! impl Observer for Wake {
//!     async fn on_event(&self, _n: &Notification) -> Result<(), HandlerError> {
//!         println!("wake up");
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TimerError> {
//!     let timer = Timer::builder()
//!         .ticks(3)
//!         .tick_interval(Duration::from_millis(500))
//!         .build()?;
//!     timer.subscribe(ALARM_EVENT, Arc::new(Wake))?;
//!
//!     let handle = timer.start()?;
//!     match handle.wait().await? {
//!         TimerOutcome::Fired { delivered, .. } => println!("{delivered} observer(s) woke up"),
//!         TimerOutcome::Cancelled { ticks } => println!("cancelled after {ticks} tick(s)"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handle;
pub mod timer;

pub use error::{TimerError, TimerResult};
pub use handle::{Canceller, TimerHandle, TimerOutcome};
pub use timer::{Timer, TimerBuilder, TimerConfig, ALARM_EVENT, TICK};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{TimerError, TimerResult};
    pub use crate::handle::{Canceller, TimerHandle, TimerOutcome};
    pub use crate::timer::{Timer, TimerBuilder, TimerConfig, ALARM_EVENT};
}
