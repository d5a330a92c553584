//! Severity levels and output layouts.

use std::fmt;

/// Severity of a diagnostic line, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Threshold that silences everything; never attached to a line.
    Off = 5,
}

impl Level {
    /// Accepts the names used in `ALARMCLOCK_LOG_LEVEL` and config files,
    /// in any case. `warning` and `none` are aliases.
    pub fn parse(s: &str) -> Option<Self> {
        let level = match s.to_ascii_lowercase().as_str() {
            "trace" => Level::Trace,
            "debug" => Level::Debug,
            "info" => Level::Info,
            "warn" | "warning" => Level::Warn,
            "error" => Level::Error,
            "off" | "none" => Level::Off,
            _ => return None,
        };
        Some(level)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error]
            .get(value as usize)
            .copied()
            .unwrap_or(Level::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout of a diagnostic line on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Format {
    /// `2026-01-01 12:00:00.000 INFO  [target] message`
    Pretty = 0,
    /// `12:00:00 I target: message`
    Compact = 1,
    /// One JSON object per line
    Json = 2,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        let format = match s.to_ascii_lowercase().as_str() {
            "pretty" => Format::Pretty,
            "compact" => Format::Compact,
            "json" => Format::Json,
            _ => return None,
        };
        Some(format)
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Format::Pretty,
            1 => Format::Compact,
            _ => Format::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        let levels = [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Off,
        ];
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_u8_round_trip() {
        for level in [Level::Trace, Level::Warn, Level::Off] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
        assert_eq!(Level::from_u8(200), Level::Off);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Level::parse("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("none"), Some(Level::Off));
        assert_eq!(Level::parse("loud"), None);

        assert_eq!(Format::parse("Compact"), Some(Format::Compact));
        assert_eq!(Format::parse("json"), Some(Format::Json));
        assert_eq!(Format::parse("xml"), None);
    }
}
