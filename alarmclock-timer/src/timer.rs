//! Countdown timer.

use crate::error::{TimerError, TimerResult};
use crate::handle::{cancelled, TimerHandle, TimerOutcome};
use alarmclock_events::{EventRegistry, Observer, SourceId};
use alarmclock_log::{debug, info, warn, Console};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// The only event a [`Timer`] publishes.
pub const ALARM_EVENT: &str = "alarm";

/// Text written to the console on every tick.
pub const TICK: &str = "Tick";

/// Timer configuration.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    /// Number of ticks before the alarm
    pub ticks: u32,

    /// Pause after each tick
    pub tick_interval: Duration,

    /// Whether to log countdown progress
    pub log_execution: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            tick_interval: Duration::from_secs(1),
            log_execution: true,
        }
    }
}

/// Counts down on a background task, then publishes [`ALARM_EVENT`].
///
/// A timer runs at most once: a second [`start`](Timer::start) is rejected.
pub struct Timer {
    registry: EventRegistry,
    config: TimerConfig,
    console: Console,
    started: AtomicBool,
}

impl Timer {
    /// Create a timer with the default configuration, ticking to stdout.
    pub fn new() -> TimerResult<Self> {
        Self::builder().build()
    }

    pub fn builder() -> TimerBuilder {
        TimerBuilder::new()
    }

    /// Subscribe an observer to one of this timer's events.
    pub fn subscribe(&self, event: &str, observer: Arc<dyn Observer>) -> TimerResult<()> {
        self.registry.subscribe(event, observer)?;
        Ok(())
    }

    /// Start the countdown and return immediately.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use alarmclock_timer::*;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), TimerError> {
    /// let timer = Timer::new()?;
    /// let handle = timer.start()?;
    ///
    /// // ... the caller keeps going while the timer ticks ...
    ///
    /// let outcome = handle.wait().await?;
    /// assert!(outcome.fired());
    /// # Ok(())
    /// # }
    /// ```
    pub fn start(&self) -> TimerResult<TimerHandle> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| TimerError::NoRuntime)?;

        if self.started.swap(true, Ordering::SeqCst) {
            warn!("Timer {} already started", self.registry.source());
            return Err(TimerError::AlreadyStarted);
        }

        info!(
            "Timer {} started: {} tick(s) every {:?}",
            self.registry.source(),
            self.config.ticks,
            self.config.tick_interval
        );

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let task = runtime.spawn(countdown(
            self.registry.clone(),
            self.console.clone(),
            self.config.clone(),
            cancel_rx,
        ));

        Ok(TimerHandle::new(cancel_tx, task))
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn source(&self) -> SourceId {
        self.registry.source()
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }
}

async fn countdown(
    registry: EventRegistry,
    console: Console,
    config: TimerConfig,
    mut cancel: watch::Receiver<bool>,
) -> TimerResult<TimerOutcome> {
    for tick in 1..=config.ticks {
        if *cancel.borrow() {
            return Ok(stopped(tick - 1, &config));
        }

        console.line(TICK)?;
        if config.log_execution {
            debug!("Tick {}/{}", tick, config.ticks);
        }

        tokio::select! {
            _ = tokio::time::sleep(config.tick_interval) => {}
            _ = cancelled(&mut cancel) => return Ok(stopped(tick, &config)),
        }
    }

    let delivered = registry.publish(ALARM_EVENT).await?;
    if config.log_execution {
        info!("Alarm delivered to {} observer(s)", delivered);
    }

    Ok(TimerOutcome::Fired {
        ticks: config.ticks,
        delivered,
    })
}

fn stopped(ticks: u32, config: &TimerConfig) -> TimerOutcome {
    if config.log_execution {
        info!("Countdown cancelled after {} tick(s)", ticks);
    }
    TimerOutcome::Cancelled { ticks }
}

/// Timer builder.
pub struct TimerBuilder {
    config: TimerConfig,
    console: Console,
}

impl TimerBuilder {
    pub fn new() -> Self {
        Self {
            config: TimerConfig::default(),
            console: Console::stdout(),
        }
    }

    pub fn config(mut self, config: TimerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ticks(mut self, ticks: u32) -> Self {
        self.config.ticks = ticks;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval = interval;
        self
    }

    pub fn log_execution(mut self, enabled: bool) -> Self {
        self.config.log_execution = enabled;
        self
    }

    /// Where tick indications are written
    pub fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn build(self) -> TimerResult<Timer> {
        if self.config.ticks == 0 {
            return Err(TimerError::Config("ticks must be at least 1".to_string()));
        }

        let registry = EventRegistry::new("timer", [ALARM_EVENT])?;
        debug!(
            "Timer config - ticks: {}, tick_interval: {:?}",
            self.config.ticks, self.config.tick_interval
        );

        Ok(Timer {
            registry,
            config: self.config,
            console: self.console,
            started: AtomicBool::new(false),
        })
    }
}

impl Default for TimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmclock_events::{HandlerError, Notification};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records how many ticks the console held when the alarm arrived.
    struct TickCounter {
        console: Console,
        seen: Mutex<Vec<(usize, Notification)>>,
    }

    impl TickCounter {
        fn new(console: &Console) -> Arc<Self> {
            Arc::new(Self {
                console: console.clone(),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Observer for TickCounter {
        async fn on_event(&self, notification: &Notification) -> Result<(), HandlerError> {
            let ticks = self.console.lines().iter().filter(|l| *l == TICK).count();
            self.seen.lock().unwrap().push((ticks, notification.clone()));
            Ok(())
        }
    }

    struct Refuse;

    #[async_trait]
    impl Observer for Refuse {
        async fn on_event(&self, _notification: &Notification) -> Result<(), HandlerError> {
            Err(HandlerError::Failed("no".to_string()))
        }
    }

    fn quiet_timer(console: &Console) -> Timer {
        Timer::builder()
            .console(console.clone())
            .log_execution(false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let timer = Timer::builder().build().unwrap();
        assert_eq!(timer.config().ticks, 5);
        assert_eq!(timer.config().tick_interval, Duration::from_secs(1));
        assert_eq!(timer.registry().events(), [ALARM_EVENT]);
        assert!(!timer.is_started());
    }

    #[test]
    fn test_zero_ticks_rejected() {
        assert!(matches!(
            Timer::builder().ticks(0).build(),
            Err(TimerError::Config(_))
        ));
    }

    #[test]
    fn test_start_outside_runtime() {
        let timer = Timer::new().unwrap();
        assert!(matches!(timer.start(), Err(TimerError::NoRuntime)));
        assert!(!timer.is_started());
    }

    #[test]
    fn test_subscribe_unknown_event() {
        let timer = Timer::new().unwrap();
        let console = Console::buffered();
        let result = timer.subscribe("snooze", TickCounter::new(&console));
        assert!(matches!(result, Err(TimerError::Registry(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_ticks_then_one_alarm() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);
        let counter = TickCounter::new(&console);
        timer.subscribe(ALARM_EVENT, counter.clone()).unwrap();

        let started = tokio::time::Instant::now();
        let outcome = timer.start().unwrap().wait().await.unwrap();

        assert_eq!(
            outcome,
            TimerOutcome::Fired {
                ticks: 5,
                delivered: 1
            }
        );
        assert!(started.elapsed() >= Duration::from_secs(5));

        let seen = counter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 5);
        assert_eq!(seen[0].1.event, ALARM_EVENT);
        assert_eq!(seen[0].1.source, timer.source());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_returns_before_countdown() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);

        let handle = timer.start().unwrap();
        assert!(!handle.is_finished());
        assert!(console.lines().len() < 5);

        handle.wait().await.unwrap();
        assert_eq!(console.lines().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_rejected() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);
        let counter = TickCounter::new(&console);
        timer.subscribe(ALARM_EVENT, counter.clone()).unwrap();

        let handle = timer.start().unwrap();
        assert!(matches!(timer.start(), Err(TimerError::AlreadyStarted)));
        handle.wait().await.unwrap();
        assert!(matches!(timer.start(), Err(TimerError::AlreadyStarted)));

        assert_eq!(counter.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_countdown() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);
        let counter = TickCounter::new(&console);
        timer.subscribe(ALARM_EVENT, counter.clone()).unwrap();

        let handle = timer.start().unwrap();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        handle.cancel();

        let outcome = handle.wait().await.unwrap();
        assert_eq!(outcome, TimerOutcome::Cancelled { ticks: 3 });
        assert_eq!(console.lines().len(), 3);
        assert!(counter.seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_keeps_running() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);
        let counter = TickCounter::new(&console);
        timer.subscribe(ALARM_EVENT, counter.clone()).unwrap();

        drop(timer.start().unwrap());
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(counter.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_failure_reaches_wait() {
        let console = Console::buffered();
        let timer = quiet_timer(&console);
        timer.subscribe(ALARM_EVENT, Arc::new(Refuse)).unwrap();

        let result = timer.start().unwrap().wait().await;
        assert!(matches!(result, Err(TimerError::Registry(_))));
        assert_eq!(console.lines().len(), 5);
    }
}
