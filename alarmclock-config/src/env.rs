// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Prefix of every variable read by [`crate::AlarmConfig::load`].
pub const ENV_PREFIX: &str = "ALARMCLOCK";

/// Environment variable loader
///
/// Reads the process environment, or a fixed set of variables handed to
/// [`EnvLoader::from_vars`]. Variables from a `.env` file added with
/// [`EnvLoader::with_dotenv`] only apply where that source has no value.
pub struct EnvLoader {
    prefix: Option<String>,
    vars: Option<HashMap<String, String>>,
    dotenv: HashMap<String, String>,
}

impl EnvLoader {
    /// Loader over the process environment
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            vars: None,
            dotenv: HashMap::new(),
        }
    }

    /// Loader over the given variables only
    pub fn from_vars<I, K, V>(prefix: Option<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix,
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            dotenv: HashMap::new(),
        }
    }

    /// Layer a `.env` file underneath the current source. A missing file
    /// adds nothing.
    pub fn with_dotenv(mut self, path: &Path) -> Result<Self> {
        let read_error =
            |e: dotenvy::Error| ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e));

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => return Ok(self),
            Err(e) => return Err(read_error(e)),
        };
        for entry in entries {
            let (key, value) = entry.map_err(read_error)?;
            self.dotenv.insert(key, value);
        }
        Ok(self)
    }

    /// Full variable name for `key`, e.g. `TICKS` -> `ALARMCLOCK_TICKS`
    pub fn full_key(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific variable; `None` when unset or not valid unicode
    pub fn load_var(&self, key: &str) -> Option<String> {
        let full_key = self.full_key(key);
        let value = match self.vars {
            Some(ref vars) => vars.get(&full_key).cloned(),
            None => env::var(&full_key).ok(),
        };
        value.or_else(|| self.dotenv.get(&full_key).cloned())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(ENV_PREFIX.to_string()))
    }
}
