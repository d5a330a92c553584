//! Named-event publish/subscribe for alarmclock
//!
//! An [`EventRegistry`] is embedded by an emitter and lists, once and for
//! all, the event names that emitter can publish. Observers subscribe to
//! one of those names and are notified, in subscription order, each time
//! the emitter publishes it.
//!
//! ## Quick Start
//!
//! ```rust
//! use alarmclock_events::*;
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct Doorbell;
//!
//! #[async_trait]
//! impl Observer for Doorbell {
//!     async fn on_event(&self, notification: &Notification) -> Result<(), HandlerError> {
//!         println!("{} from {}", notification.event, notification.source_name);
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), RegistryError> {
//! let registry = EventRegistry::new("door", ["opened", "closed"])?;
//! registry.subscribe("opened", Arc::new(Doorbell))?;
//!
//! assert_eq!(registry.publish("opened").await?, 1);
//! assert!(registry.publish("knocked").await.is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Observer failures are not isolated: the first failing observer stops the
//! delivery and the publisher gets [`RegistryError::HandlerFailed`].

pub mod event;
pub mod registry;

pub use event::{HandlerError, Notification, Observer, SourceId};
pub use registry::{
    EventRegistry, EventRegistryBuilder, RegistryConfig, RegistryError, RegistryResult,
};
