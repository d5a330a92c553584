//! Event registry implementation

use crate::event::{HandlerError, Notification, Observer, SourceId};
use alarmclock_log::{debug, error, info, trace};
use dashmap::DashMap;
use std::sync::Arc;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Named-event publish/subscribe hub, embedded by any component that
/// notifies interested parties.
///
/// The set of valid event names is fixed at construction. Clones share the
/// same subscribers and source identity.
#[derive(Clone)]
pub struct EventRegistry {
    source: SourceId,

    name: Arc<str>,

    /// Valid event names, in construction order
    events: Arc<[String]>,

    /// Subscribers registered for each event name, in subscription order
    subscribers: Arc<DashMap<String, Vec<Arc<dyn Observer>>>>,

    config: Arc<RegistryConfig>,
}

/// Registry configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Log subscriptions and deliveries
    pub enable_logging: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
        }
    }
}

impl EventRegistry {
    /// Create a registry accepting exactly `events`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alarmclock_events::EventRegistry;
    ///
    /// let registry = EventRegistry::new("door", ["opened", "closed"]).unwrap();
    /// assert!(registry.contains_event("opened"));
    /// assert!(EventRegistry::new("door", Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(name: impl Into<String>, events: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(name, events, RegistryConfig::default())
    }

    /// Create a registry with custom config
    pub fn with_config<I, S>(
        name: impl Into<String>,
        events: I,
        config: RegistryConfig,
    ) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let events: Vec<String> = events.into_iter().map(Into::into).collect();
        if events.is_empty() {
            return Err(RegistryError::NoEvents);
        }

        let subscribers = DashMap::with_capacity(events.len());
        for event in &events {
            check_not_empty(event)?;
            if subscribers.insert(event.clone(), Vec::new()).is_some() {
                return Err(RegistryError::DuplicateEvent(event.clone()));
            }
        }

        let name: Arc<str> = Arc::from(name.into());
        if config.enable_logging {
            debug!("Created registry '{}' for events {:?}", name, events);
        }

        Ok(Self {
            source: SourceId::new(),
            name,
            events: events.into(),
            subscribers: Arc::new(subscribers),
            config: Arc::new(config),
        })
    }

    /// Subscribe `observer` to `event`.
    ///
    /// Fails without touching any state when the event is unknown or the
    /// same observer reference is already subscribed to it.
    pub fn subscribe(&self, event: &str, observer: Arc<dyn Observer>) -> RegistryResult<()> {
        check_not_empty(event)?;

        let mut observers = self
            .subscribers
            .get_mut(event)
            .ok_or_else(|| RegistryError::InvalidEventName(event.to_string()))?;

        if observers.iter().any(|existing| same_observer(existing, &observer)) {
            return Err(RegistryError::DuplicateSubscription(event.to_string()));
        }

        if self.config.enable_logging {
            debug!(
                "Subscribed {} to '{}' on {}",
                observer.observer_name(),
                event,
                self.name
            );
        }
        observers.push(observer);

        Ok(())
    }

    /// Publish `event` to its subscribers.
    ///
    /// Observers are awaited one after another in subscription order on the
    /// calling task. The first failing observer stops the delivery and its
    /// error is returned. Subscriptions made while a publish is in flight
    /// are not seen by that publish. Returns the number of observers
    /// notified.
    pub async fn publish(&self, event: &str) -> RegistryResult<usize> {
        check_not_empty(event)?;

        let observers = self
            .subscribers
            .get(event)
            .map(|observers| observers.value().clone())
            .ok_or_else(|| RegistryError::InvalidEventName(event.to_string()))?;

        let notification = Notification::new(self.source, self.name.as_ref(), event);

        if self.config.enable_logging {
            info!(
                "Publishing '{}' from {} to {} observer(s)",
                event,
                self.name,
                observers.len()
            );
            trace!("Notification: {}", notification.to_json());
        }

        for (position, observer) in observers.iter().enumerate() {
            if let Err(e) = observer.on_event(&notification).await {
                if self.config.enable_logging {
                    error!(
                        "{} failed handling '{}': {}",
                        observer.observer_name(),
                        event,
                        e
                    );
                }
                return Err(RegistryError::HandlerFailed {
                    event: event.to_string(),
                    delivered: position,
                    source: e,
                });
            }
        }

        Ok(observers.len())
    }

    /// Number of observers subscribed to `event` (0 for unknown events)
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map(|o| o.len()).unwrap_or(0)
    }

    /// Valid event names, in construction order
    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.subscribers.contains_key(event)
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("source", &self.source)
            .field("name", &self.name)
            .field("events", &self.events)
            .finish()
    }
}

fn check_not_empty(event: &str) -> RegistryResult<()> {
    if event.is_empty() {
        return Err(RegistryError::NullArgument("event"));
    }
    Ok(())
}

// Compare data pointers only; vtable pointers for the same type may differ
// across codegen units.
fn same_observer(a: &Arc<dyn Observer>, b: &Arc<dyn Observer>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("At least one event needs to be defined")]
    NoEvents,

    #[error("Duplicate event defined: {0}")]
    DuplicateEvent(String),

    #[error("'{0}' must not be empty")]
    NullArgument(&'static str),

    #[error("Event not supported: {0}")]
    InvalidEventName(String),

    #[error("Observer already subscribed to event: {0}")]
    DuplicateSubscription(String),

    #[error("Handler failed while delivering '{event}' after {delivered} observer(s): {source}")]
    HandlerFailed {
        event: String,
        delivered: usize,
        #[source]
        source: HandlerError,
    },
}

/// Registry builder
pub struct EventRegistryBuilder {
    name: String,
    events: Vec<String>,
    config: RegistryConfig,
}

impl EventRegistryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
            config: RegistryConfig::default(),
        }
    }

    /// Add a valid event name
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }

    /// Enable/disable logging
    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.config.enable_logging = enabled;
        self
    }

    /// Build the registry, validating the event names
    pub fn build(self) -> RegistryResult<EventRegistry> {
        EventRegistry::with_config(self.name, self.events, self.config)
    }
}
