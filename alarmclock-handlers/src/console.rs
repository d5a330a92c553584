//! Handler printing the alarm message

use crate::handler::{AlarmHandler, ALARM_MESSAGE};
use alarmclock_events::HandlerError;
use alarmclock_log::Console;
use async_trait::async_trait;

/// Writes [`ALARM_MESSAGE`] to a console.
#[derive(Debug, Clone)]
pub struct ConsoleAlarm {
    console: Console,
}

impl ConsoleAlarm {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

#[async_trait]
impl AlarmHandler for ConsoleAlarm {
    fn name(&self) -> &str {
        "console"
    }

    async fn handle_alarm(&self) -> Result<(), HandlerError> {
        self.console.line(ALARM_MESSAGE)?;
        Ok(())
    }
}
