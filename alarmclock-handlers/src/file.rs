//! Handler writing the alarm message to a file

use crate::handler::{AlarmHandler, ALARM_MESSAGE};
use alarmclock_events::HandlerError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Default output path, relative to the working directory.
pub const DEFAULT_ALARM_FILE: &str = "alarm.txt";

/// Overwrites a file with [`ALARM_MESSAGE`] on every alarm.
///
/// Write failures are returned as [`HandlerError::Io`].
#[derive(Debug, Clone)]
pub struct FileAlarm {
    path: PathBuf,
}

impl FileAlarm {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileAlarm {
    fn default() -> Self {
        Self::new(DEFAULT_ALARM_FILE)
    }
}

#[async_trait]
impl AlarmHandler for FileAlarm {
    fn name(&self) -> &str {
        "file"
    }

    async fn handle_alarm(&self) -> Result<(), HandlerError> {
        tokio::fs::write(&self.path, ALARM_MESSAGE).await?;
        Ok(())
    }
}
