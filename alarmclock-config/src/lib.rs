// Configuration management for alarmclock

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::{EnvLoader, ENV_PREFIX};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for `ticks`.
pub const MAX_TICKS: u32 = 86_400;

/// Upper bound for `tick_interval_ms` (one hour).
pub const MAX_TICK_INTERVAL_MS: u64 = 3_600_000;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error", "off", "none"];
const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Application configuration.
///
/// Sources, lowest precedence first: defaults, a TOML or JSON file, a
/// `.env` file, then `ALARMCLOCK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    /// Number of ticks before the alarm
    pub ticks: u32,

    /// Pause after each tick, in milliseconds
    pub tick_interval_ms: u64,

    /// File overwritten by the file handler
    pub alarm_file: PathBuf,

    /// Log level override (trace, debug, info, warn, error, off)
    pub log_level: Option<String>,

    /// Log format override (pretty, compact, json)
    pub log_format: Option<String>,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            tick_interval_ms: 1000,
            alarm_file: PathBuf::from("alarm.txt"),
            log_level: None,
            log_format: None,
        }
    }
}

impl AlarmConfig {
    /// Load from every source and validate: `path` if given, `./.env`,
    /// then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env = EnvLoader::default().with_dotenv(Path::new(".env"))?;
        Self::load_with(path, &env)
    }

    /// Layer `env` over the defaults or the file at `path`, then validate.
    pub fn load_with(path: Option<&Path>, env: &EnvLoader) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;

        config.validate()?;
        Ok(config)
    }

    /// Read a TOML or JSON file, format chosen by extension. Missing keys
    /// keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        ConfigLoader::auto(path)?.load_file(path)
    }

    /// Override fields from `ALARMCLOCK_TICKS`, `ALARMCLOCK_TICK_INTERVAL_MS`,
    /// `ALARMCLOCK_ALARM_FILE`, `ALARMCLOCK_LOG_LEVEL` and
    /// `ALARMCLOCK_LOG_FORMAT`.
    pub fn apply_env(&mut self, env: &EnvLoader) -> Result<()> {
        if let Some(ticks) = env.load_var("TICKS") {
            self.ticks = parse_var(env, "TICKS", &ticks)?;
        }
        if let Some(interval) = env.load_var("TICK_INTERVAL_MS") {
            self.tick_interval_ms = parse_var(env, "TICK_INTERVAL_MS", &interval)?;
        }
        if let Some(file) = env.load_var("ALARM_FILE") {
            self.alarm_file = PathBuf::from(file);
        }
        if let Some(level) = env.load_var("LOG_LEVEL") {
            self.log_level = Some(level);
        }
        if let Some(format) = env.load_var("LOG_FORMAT") {
            self.log_format = Some(format);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for AlarmConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::in_range(self.ticks, 1, MAX_TICKS, "ticks")?;
        ConfigValidator::in_range(
            self.tick_interval_ms,
            0,
            MAX_TICK_INTERVAL_MS,
            "tick_interval_ms",
        )?;
        ConfigValidator::not_empty(&self.alarm_file.to_string_lossy(), "alarm_file")?;

        if let Some(ref level) = self.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "log_level must be one of {:?}, got {}",
                    LOG_LEVELS, level
                )));
            }
        }
        if let Some(ref format) = self.log_format {
            if !LOG_FORMATS.contains(&format.to_lowercase().as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "log_format must be one of {:?}, got {}",
                    LOG_FORMATS, format
                )));
            }
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(env: &EnvLoader, key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        ConfigError::ParseError(format!("{}={}: {}", env.full_key(key), value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> EnvLoader {
        EnvLoader::from_vars(Some(ENV_PREFIX.to_string()), vars.iter().copied())
    }

    #[test]
    fn test_defaults() {
        let config = AlarmConfig::default();
        assert_eq!(config.ticks, 5);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.alarm_file, PathBuf::from("alarm.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_file_keeps_missing_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "ticks = 3\nlog_level = \"debug\"").unwrap();

        let config = AlarmConfig::from_file(file.path()).unwrap();

        assert_eq!(config.ticks, 3);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"tick_interval_ms": 250, "alarm_file": "out/alarm.txt"}}"#).unwrap();

        let config = AlarmConfig::from_file(file.path()).unwrap();

        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.alarm_file, PathBuf::from("out/alarm.txt"));
    }

    #[test]
    fn test_missing_file() {
        let result = AlarmConfig::from_file(Path::new("/nonexistent/alarmclock.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AlarmConfig::default();
        config
            .apply_env(&env(&[
                ("ALARMCLOCK_TICKS", "2"),
                ("ALARMCLOCK_TICK_INTERVAL_MS", " 10 "),
                ("ALARMCLOCK_ALARM_FILE", "/tmp/wake.txt"),
                ("ALARMCLOCK_LOG_LEVEL", "error"),
                ("ALARMCLOCK_LOG_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.ticks, 2);
        assert_eq!(config.tick_interval_ms, 10);
        assert_eq!(config.alarm_file, PathBuf::from("/tmp/wake.txt"));
        assert_eq!(config.log_level.as_deref(), Some("error"));
        assert_eq!(config.log_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_layered_load_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("alarmclock.toml");
        std::fs::write(
            &file,
            "ticks = 3\ntick_interval_ms = 250\nlog_level = \"warn\"\n",
        )
        .unwrap();
        let dotenv = dir.path().join(".env");
        std::fs::write(
            &dotenv,
            "ALARMCLOCK_TICKS=4\nALARMCLOCK_TICK_INTERVAL_MS=100\nALARMCLOCK_LOG_FORMAT=json\n",
        )
        .unwrap();

        let env = env(&[("ALARMCLOCK_TICKS", "2")]).with_dotenv(&dotenv).unwrap();
        let config = AlarmConfig::load_with(Some(file.as_path()), &env).unwrap();

        // environment > .env > file > defaults
        assert_eq!(config.ticks, 2);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(config.log_format.as_deref(), Some("json"));
        assert_eq!(config.alarm_file, PathBuf::from("alarm.txt"));
    }

    #[test]
    fn test_layered_load_without_file_or_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        let env = env(&[]).with_dotenv(&dir.path().join(".env")).unwrap();

        let config = AlarmConfig::load_with(None, &env).unwrap();
        assert_eq!(config, AlarmConfig::default());
    }

    #[test]
    fn test_layered_load_validates_dotenv_logging() {
        let dir = tempfile::tempdir().unwrap();
        let dotenv = dir.path().join(".env");
        std::fs::write(&dotenv, "ALARMCLOCK_LOG_LEVEL=loud\n").unwrap();

        let env = env(&[]).with_dotenv(&dotenv).unwrap();
        let result = AlarmConfig::load_with(None, &env);

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_env_parse_error_names_variable() {
        let mut config = AlarmConfig::default();
        let err = config
            .apply_env(&env(&[("ALARMCLOCK_TICKS", "five")]))
            .unwrap_err();

        assert!(err.to_string().contains("ALARMCLOCK_TICKS=five"));
        assert_eq!(config.ticks, 5);
    }

    #[test]
    fn test_validation() {
        let zero_ticks = AlarmConfig {
            ticks: 0,
            ..AlarmConfig::default()
        };
        assert!(zero_ticks.validate().is_err());

        let no_file = AlarmConfig {
            alarm_file: PathBuf::new(),
            ..AlarmConfig::default()
        };
        assert!(no_file.validate().is_err());

        let bad_level = AlarmConfig {
            log_level: Some("loud".to_string()),
            ..AlarmConfig::default()
        };
        assert!(bad_level.validate().is_err());

        let bad_format = AlarmConfig {
            log_format: Some("xml".to_string()),
            ..AlarmConfig::default()
        };
        assert!(bad_format.validate().is_err());
    }
}
