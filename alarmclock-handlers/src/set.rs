//! Collection of the handlers built by an application

use crate::handler::{AlarmDispatch, AlarmHandler};
use alarmclock_events::{EventRegistry, Observer, RegistryResult};
use alarmclock_log::Console;
use std::sync::Arc;

/// Every handler an application created, in creation order.
///
/// Owned by whoever wires the application together; there is no global
/// list of handlers.
pub struct HandlerSet {
    console: Console,
    handlers: Vec<Arc<dyn Observer>>,
}

impl HandlerSet {
    /// Handlers added to this set write their indications to `console`.
    pub fn new(console: Console) -> Self {
        Self {
            console,
            handlers: Vec::new(),
        }
    }

    /// Wrap `handler` into an observer, record it, and return it for
    /// subscription.
    pub fn add<H: AlarmHandler>(&mut self, handler: H) -> Arc<dyn Observer> {
        let observer: Arc<dyn Observer> =
            Arc::new(AlarmDispatch::new(handler, self.console.clone()));
        self.handlers.push(observer.clone());
        observer
    }

    /// Subscribe every handler, in creation order, to `event` on `registry`.
    pub fn subscribe_all(&self, registry: &EventRegistry, event: &str) -> RegistryResult<()> {
        for handler in &self.handlers {
            registry.subscribe(event, handler.clone())?;
        }
        Ok(())
    }

    pub fn handlers(&self) -> &[Arc<dyn Observer>] {
        &self.handlers
    }

    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.observer_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
