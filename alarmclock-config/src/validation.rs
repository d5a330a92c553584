// Configuration validation

use crate::{ConfigError, Result};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a number is within range
    pub fn in_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {}, got {}",
                field, min, max, value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(ConfigValidator::not_empty("alarm.txt", "alarm_file").is_ok());
        assert!(ConfigValidator::not_empty("  ", "alarm_file").is_err());
    }

    #[test]
    fn test_in_range() {
        assert!(ConfigValidator::in_range(5, 1, 10, "ticks").is_ok());
        let err = ConfigValidator::in_range(0, 1, 10, "ticks").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: ticks must be between 1 and 10, got 0"
        );
    }
}
