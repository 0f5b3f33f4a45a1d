//! Evaluation configuration
//!
//! This module defines the two scalars that drive an evaluation, with
//! environment variable loading, TOML file loading, and validation.

use crate::error::RatingError;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration for one evaluation run
///
/// Immutable for the duration of an evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Fraction of rating and pot withdrawn from each player per match,
    /// recommended domain [0.0, 1.0]
    pub factor: f64,
    /// Reserve value every player starts with on first appearance
    pub start_pot: i64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            factor: 0.2,
            start_pot: 42,
        }
    }
}

impl EvaluationConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(factor) = env::var("INKK_FACTOR") {
            config.factor = factor
                .parse()
                .map_err(|_| anyhow!("Invalid INKK_FACTOR value: {}", factor))?;
        }
        if let Ok(pot) = env::var("INKK_START_POT") {
            config.start_pot = pot
                .parse()
                .map_err(|_| anyhow!("Invalid INKK_START_POT value: {}", pot))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a pot value from a short numeric string, as entered in the
    /// scale input box. Non-integer input fails the whole operation before
    /// any line is parsed.
    pub fn parse_pot(value: &str) -> std::result::Result<i64, RatingError> {
        value
            .trim()
            .parse()
            .map_err(|_| RatingError::InvalidConfiguration {
                value: value.to_string(),
            })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(anyhow!("Factor must be a finite number"));
        }
        if !(0.0..=1.0).contains(&self.factor) {
            return Err(anyhow!(
                "Factor must be between 0.0 and 1.0, got {}",
                self.factor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluationConfig::default();
        assert_eq!(config.factor, 0.2);
        assert_eq!(config.start_pot, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_factor() {
        let config = EvaluationConfig {
            factor: 1.5,
            start_pot: 42,
        };
        assert!(config.validate().is_err());

        let config = EvaluationConfig {
            factor: -0.1,
            start_pot: 42,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_factor() {
        let config = EvaluationConfig {
            factor: f64::NAN,
            start_pot: 42,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_pot() {
        assert_eq!(EvaluationConfig::parse_pot("42").unwrap(), 42);
        assert_eq!(EvaluationConfig::parse_pot(" 100 ").unwrap(), 100);
        assert_eq!(EvaluationConfig::parse_pot("-7").unwrap(), -7);
    }

    #[test]
    fn test_parse_pot_rejects_non_integer() {
        let err = EvaluationConfig::parse_pot("4.2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Scale Value");
        assert!(EvaluationConfig::parse_pot("abc").is_err());
        assert!(EvaluationConfig::parse_pot("").is_err());
    }
}
