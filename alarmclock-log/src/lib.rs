//! Diagnostics and console output for alarmclock.
//!
//! Output goes through two separate channels:
//!
//! - diagnostics, written to stderr by the [`trace!`], [`debug!`],
//!   [`info!`], [`warn!`] and [`error!`] macros and filtered by a global
//!   threshold;
//! - user-facing indications (`Tick`, `Alarm received`, ...), written
//!   through a [`Console`] that tests can swap for an in-memory buffer.
//!
//! ```rust
//! use alarmclock_log::{debug, info, Level};
//!
//! alarmclock_log::set_level(Level::Debug);
//! info!("countdown of {} ticks", 5);
//! debug!(target: "alarmclock::registry", "publishing '{}'", "alarm");
//! ```
//!
//! The threshold starts from the environment, read on first use:
//!
//! | Variable | Values |
//! |---|---|
//! | `ALARMCLOCK_LOG_LEVEL` | `trace`, `debug`, `info`, `warn`, `error`, `off` |
//! | `ALARMCLOCK_LOG_FORMAT` | `pretty`, `compact`, `json` |
//! | `ALARMCLOCK_DEBUG` | `1`/`true` lowers the default level to `debug` |
//! | `ALARMCLOCK_LOG_COLOR` | `1`/`0`, defaults to on for terminals without `NO_COLOR` |
//! | `ALARMCLOCK_LOG_TIMESTAMPS` | `1`/`0` |
//! | `ALARMCLOCK_LOG_MODULE` | `1`/`0`, whether the target is printed |
//!
//! [`set_level`], [`set_format`] and [`set_debug`] override it at runtime.

pub mod console;
pub mod level;
mod output;

pub use console::Console;
pub use level::{Format, Level};

use once_cell::sync::Lazy;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);
static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Info as u8);
static FORMAT: AtomicU8 = AtomicU8::new(Format::Pretty as u8);

// Seeds the atomics above when first forced.
static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

/// Logging settings as found in the environment at first use.
///
/// Runtime overrides change the active threshold and format but not this
/// snapshot.
#[derive(Debug, Clone)]
pub struct Settings {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub color: bool,
    pub timestamps: bool,
    /// Print the module path (or explicit target) of each line
    pub show_target: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Pretty,
            color: false,
            timestamps: true,
            show_target: true,
        }
    }
}

impl Settings {
    fn from_env() -> Self {
        let debug = env_flag("ALARMCLOCK_DEBUG").unwrap_or(false);
        let fallback_level = if debug { Level::Debug } else { Level::Info };

        let settings = Self {
            debug,
            level: env_parsed("ALARMCLOCK_LOG_LEVEL", Level::parse).unwrap_or(fallback_level),
            format: env_parsed("ALARMCLOCK_LOG_FORMAT", Format::parse).unwrap_or(Format::Pretty),
            color: env_flag("ALARMCLOCK_LOG_COLOR")
                .unwrap_or_else(|| env::var_os("NO_COLOR").is_none() && env::var_os("TERM").is_some()),
            timestamps: env_flag("ALARMCLOCK_LOG_TIMESTAMPS").unwrap_or(true),
            show_target: env_flag("ALARMCLOCK_LOG_MODULE").unwrap_or(true),
        };

        DEBUG.store(settings.debug, Ordering::SeqCst);
        THRESHOLD.store(settings.level as u8, Ordering::SeqCst);
        FORMAT.store(settings.format as u8, Ordering::SeqCst);
        settings
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn env_parsed<T>(name: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    env::var(name).ok().as_deref().and_then(parse)
}

/// Read the environment now instead of at the first log line.
///
/// Every query and override below does this implicitly, so calling it is
/// only needed to pin the moment the environment is read.
pub fn init() {
    Lazy::force(&SETTINGS);
}

/// The environment snapshot.
pub fn settings() -> &'static Settings {
    &SETTINGS
}

pub fn is_debug_enabled() -> bool {
    init();
    DEBUG.load(Ordering::Relaxed)
}

/// Whether a line at `level` passes the current threshold. [`Level::Off`]
/// never does.
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= THRESHOLD.load(Ordering::Relaxed)
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

pub fn current_format() -> Format {
    init();
    Format::from_u8(FORMAT.load(Ordering::Relaxed))
}

pub fn set_level(level: Level) {
    init();
    THRESHOLD.store(level as u8, Ordering::SeqCst);
}

pub fn set_format(format: Format) {
    init();
    FORMAT.store(format as u8, Ordering::SeqCst);
}

/// Turning debug on also lowers a stricter threshold to [`Level::Debug`].
pub fn set_debug(enabled: bool) {
    init();
    DEBUG.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        THRESHOLD.store(Level::Debug as u8, Ordering::SeqCst);
    }
}

/// Write one diagnostic line. Filtering is the caller's job; use the
/// macros.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    output::write_line(current_format(), level, target, message, settings());
}

#[doc(hidden)]
pub fn enabled(level: Level) -> bool {
    is_level_enabled(level) || (level == Level::Debug && is_debug_enabled())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($level) {
            $crate::log($level, $target, &format!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__emit!($level, target: module_path!(), $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Trace, $($arg)+) };
}

/// Also emitted when debug mode is on, whatever the threshold.
///
/// ```rust
/// use alarmclock_log::debug;
///
/// debug!("tick {}/{}", 1, 5);
/// debug!(target: "alarmclock::timer", "countdown cancelled");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Error, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!is_level_enabled(Level::Off));
        assert!(!enabled(Level::Off));
    }

    #[test]
    fn test_queries_read_environment_first() {
        // a level check alone must seed the threshold, or lines logged
        // before any explicit init would be filtered by the built-in default
        let _ = is_level_enabled(Level::Debug);
        assert!(Lazy::get(&SETTINGS).is_some());
    }

    // The threshold, format and debug flag are process-wide, so every
    // override is exercised in this one test.
    #[test]
    fn test_runtime_overrides() {
        let (level, format, debug) = (current_level(), current_format(), is_debug_enabled());

        set_level(Level::Error);
        assert!(!is_level_enabled(Level::Warn));
        assert!(is_level_enabled(Level::Error));
        assert!(!enabled(Level::Debug));

        set_format(Format::Compact);
        assert_eq!(current_format(), Format::Compact);

        set_debug(true);
        assert_eq!(current_level(), Level::Debug);
        assert!(enabled(Level::Debug));

        set_debug(debug);
        set_format(format);
        set_level(level);
    }

    #[test]
    fn test_macro_forms() {
        let ticks = 5;
        trace!("ticks {}", ticks);
        debug!(target: "alarmclock::test", "ticks {}", ticks);
        info!("ticks {ticks}");
        warn!("plain");
        error!(target: "alarmclock::test", "plain");
    }
}
