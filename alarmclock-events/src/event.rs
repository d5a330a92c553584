//! Notifications and the observer capability

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a publishing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(Uuid);

impl SourceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What an observer receives for one delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique ID of this publish
    pub id: Uuid,

    /// Name of the published event
    pub event: String,

    /// Identity of the publishing component
    pub source: SourceId,

    /// Human readable name of the publishing component
    pub source_name: String,

    /// When the publish started
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(source: SourceId, source_name: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event: event.into(),
            source,
            source_name: source_name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Serialize as a single JSON line, for structured logging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"event\":\"{}\"}}", self.event))
    }
}

/// A capability invoked when an event it subscribed to is published.
///
/// Identity is the `Arc` holding the observer: the same `Arc` may not
/// subscribe twice to one event, while two distinct instances of the same
/// type may.
#[async_trait]
pub trait Observer: Send + Sync {
    /// Handle one delivery.
    ///
    /// An error aborts delivery to the observers subscribed after this one
    /// and is returned to the publisher.
    async fn on_event(&self, notification: &Notification) -> Result<(), HandlerError>;

    /// Name used in log lines.
    fn observer_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Errors raised by observers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("'{0}' must not be empty")]
    NullArgument(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Handler failed: {0}")]
    Failed(String),
}
