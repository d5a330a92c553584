//! Alarm handlers for alarmclock.
//!
//! An [`AlarmHandler`] performs one side effect when the alarm goes off.
//! [`HandlerSet::add`] wraps it into an
//! [`Observer`](alarmclock_events::Observer) that first writes
//! `Handling event: <event>` to the console, so it can be subscribed to a
//! timer.
//!
//! ```rust
//! use alarmclock_events::EventRegistry;
//! use alarmclock_handlers::*;
//! use alarmclock_log::Console;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let console = Console::buffered();
//! let mut handlers = HandlerSet::new(console.clone());
//! let observer = handlers.add(ConsoleAlarm::new(console.clone()));
//!
//! let registry = EventRegistry::new("timer", ["alarm"]).unwrap();
//! registry.subscribe("alarm", observer).unwrap();
//! registry.publish("alarm").await.unwrap();
//!
//! assert_eq!(console.lines(), vec!["Handling event: alarm", "Alarm received"]);
//! # }
//! ```

pub mod console;
pub mod file;
pub mod handler;
pub mod set;

pub use console::ConsoleAlarm;
pub use file::{FileAlarm, DEFAULT_ALARM_FILE};
pub use handler::{AlarmDispatch, AlarmHandler, ALARM_MESSAGE, HANDLING_PREFIX};
pub use set::HandlerSet;
