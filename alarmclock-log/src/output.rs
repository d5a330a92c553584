//! Line writers for each [`Format`].

use crate::level::{Format, Level};
use crate::Settings;
use std::io::{self, Write};

pub(crate) fn write_line(format: Format, level: Level, target: &str, message: &str, settings: &Settings) {
    let mut stderr = io::stderr().lock();
    // diagnostics are best effort; a closed stderr must not fail the caller
    let _ = match format {
        Format::Pretty => pretty(&mut stderr, level, target, message, settings),
        Format::Compact => compact(&mut stderr, level, target, message, settings),
        Format::Json => json(&mut stderr, level, target, message, settings),
    };
}

fn pretty(out: &mut impl Write, level: Level, target: &str, message: &str, settings: &Settings) -> io::Result<()> {
    if settings.timestamps {
        write!(out, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
    }
    write_level(out, level, settings)?;
    if settings.show_target && !target.is_empty() {
        write!(out, "[{}] ", target)?;
    }
    writeln!(out, "{}", message)
}

fn compact(out: &mut impl Write, level: Level, target: &str, message: &str, settings: &Settings) -> io::Result<()> {
    if settings.timestamps {
        write!(out, "{} ", chrono::Local::now().format("%H:%M:%S"))?;
    }
    let initial = level.as_str().chars().next().unwrap_or('?');
    write!(out, "{} ", initial)?;
    if settings.show_target && !target.is_empty() {
        write!(out, "{}: ", target)?;
    }
    writeln!(out, "{}", message)
}

#[cfg(feature = "color")]
fn write_level(out: &mut impl Write, level: Level, settings: &Settings) -> io::Result<()> {
    use colored::Colorize;

    if !settings.color {
        return write!(out, "{:5} ", level.as_str());
    }
    let painted = match level {
        Level::Trace => level.as_str().magenta(),
        Level::Debug => level.as_str().blue(),
        Level::Info => level.as_str().green(),
        Level::Warn => level.as_str().yellow(),
        Level::Error => level.as_str().red().bold(),
        Level::Off => level.as_str().normal(),
    };
    write!(out, "{:5} ", painted)
}

#[cfg(not(feature = "color"))]
fn write_level(out: &mut impl Write, level: Level, _settings: &Settings) -> io::Result<()> {
    write!(out, "{:5} ", level.as_str())
}

#[cfg(feature = "json")]
fn json(out: &mut impl Write, level: Level, target: &str, message: &str, _settings: &Settings) -> io::Result<()> {
    #[derive(serde::Serialize)]
    struct Line<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let line = Line {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };
    serde_json::to_writer(&mut *out, &line).map_err(io::Error::other)?;
    writeln!(out)
}

#[cfg(not(feature = "json"))]
fn json(out: &mut impl Write, level: Level, target: &str, message: &str, settings: &Settings) -> io::Result<()> {
    pretty(out, level, target, message, settings)
}
