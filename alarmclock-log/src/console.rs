//! Line-oriented console sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared writer for user-facing indications.
///
/// Cloning is cheap and every clone writes to the same destination, so a
/// timer and its handlers can share one console. [`Console::buffered`]
/// keeps the lines in memory instead of printing them.
#[derive(Clone)]
pub struct Console {
    target: Arc<Target>,
}

enum Target {
    Stdout,
    Buffer(Mutex<Vec<String>>),
}

impl Console {
    /// Console writing to standard output.
    pub fn stdout() -> Self {
        Self {
            target: Arc::new(Target::Stdout),
        }
    }

    /// Console recording lines in memory.
    pub fn buffered() -> Self {
        Self {
            target: Arc::new(Target::Buffer(Mutex::new(Vec::new()))),
        }
    }

    /// Write one line.
    pub fn line(&self, text: impl AsRef<str>) -> io::Result<()> {
        match self.target.as_ref() {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", text.as_ref())?;
                out.flush()
            }
            Target::Buffer(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(text.as_ref().to_string());
                Ok(())
            }
        }
    }

    /// Lines recorded so far. Always empty for a stdout console.
    pub fn lines(&self) -> Vec<String> {
        match self.target.as_ref() {
            Target::Stdout => Vec::new(),
            Target::Buffer(lines) => lines
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone(),
        }
    }

    pub fn is_buffered(&self) -> bool {
        matches!(self.target.as_ref(), Target::Buffer(_))
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_buffered() { "buffered" } else { "stdout" };
        f.debug_struct("Console").field("target", &kind).finish()
    }
}
