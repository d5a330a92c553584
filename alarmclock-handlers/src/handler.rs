//! Alarm handler capability and its observer adapter

use alarmclock_events::{HandlerError, Notification, Observer};
use alarmclock_log::{debug, Console};
use async_trait::async_trait;

/// Message written by the built-in handlers.
pub const ALARM_MESSAGE: &str = "Alarm received";

/// Prefix of the indication written before every delivery.
pub const HANDLING_PREFIX: &str = "Handling event: ";

/// Something that reacts to an alarm.
#[async_trait]
pub trait AlarmHandler: Send + Sync + 'static {
    /// Name used in log lines
    fn name(&self) -> &str;

    /// Perform the handler's action
    async fn handle_alarm(&self) -> Result<(), HandlerError>;
}

/// Adapts an [`AlarmHandler`] into an [`Observer`].
///
/// Every delivery writes `Handling event: <event>` to the console, then
/// runs the handler.
pub struct AlarmDispatch<H: AlarmHandler> {
    handler: H,
    console: Console,
}

impl<H: AlarmHandler> AlarmDispatch<H> {
    pub fn new(handler: H, console: Console) -> Self {
        Self { handler, console }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

#[async_trait]
impl<H: AlarmHandler> Observer for AlarmDispatch<H> {
    async fn on_event(&self, notification: &Notification) -> Result<(), HandlerError> {
        if notification.event.is_empty() {
            return Err(HandlerError::NullArgument("event"));
        }

        self.console
            .line(format!("{}{}", HANDLING_PREFIX, notification.event))?;
        debug!(
            "{} handling '{}' from {}",
            self.handler.name(),
            notification.event,
            notification.source_name
        );

        self.handler.handle_alarm().await
    }

    fn observer_name(&self) -> &str {
        self.handler.name()
    }
}
