//! Application wiring: one timer, a console handler and a file handler.

use crate::error::AppResult;
use alarmclock_config::AlarmConfig;
use alarmclock_handlers::{ConsoleAlarm, FileAlarm, HandlerSet};
use alarmclock_log::{info, Console};
use alarmclock_timer::{Timer, TimerHandle, TimerOutcome, ALARM_EVENT};

/// The composed application.
pub struct App {
    timer: Timer,
    handlers: HandlerSet,
}

impl App {
    /// Build the timer and both handlers from `config` and subscribe the
    /// handlers to the alarm, console handler first.
    pub fn build(config: &AlarmConfig, console: Console) -> AppResult<Self> {
        let timer = Timer::builder()
            .ticks(config.ticks)
            .tick_interval(config.tick_interval())
            .console(console.clone())
            .build()?;

        let mut handlers = HandlerSet::new(console.clone());
        handlers.add(ConsoleAlarm::new(console));
        handlers.add(FileAlarm::new(config.alarm_file.clone()));
        handlers.subscribe_all(timer.registry(), ALARM_EVENT)?;

        info!(
            "Wired {:?} to '{}' on timer {}",
            handlers.names(),
            ALARM_EVENT,
            timer.source()
        );

        Ok(Self { timer, handlers })
    }

    /// Start the countdown without waiting for it.
    pub fn start(&self) -> AppResult<TimerHandle> {
        Ok(self.timer.start()?)
    }

    /// Start the countdown and wait for it to end.
    pub async fn run(&self) -> AppResult<TimerOutcome> {
        Ok(self.start()?.wait().await?)
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn handlers(&self) -> &HandlerSet {
        &self.handlers
    }
}
