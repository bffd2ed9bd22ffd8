//! Tunable thresholds for the classifiers
//!
//! Defaults reproduce the fixed rules of the spam classifier and the
//! screen-time checker. A [`UtilConfig`] can be parsed from TOML or JSON;
//! missing sections and fields fall back to the defaults.

use crate::error::{Result, UtilError};
use serde::{Deserialize, Serialize};

/// Thresholds used by [`crate::core::validation::is_spam_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpamRules {
    /// Country codes longer than this are spam
    pub max_country_code_len: usize,
    /// Area codes below this are spam
    pub area_min: u32,
    /// Area codes above this are spam
    pub area_max: u32,
    /// Length of an identical-digit run that marks a number as spam
    pub repeat_run: usize,
}

impl Default for SpamRules {
    fn default() -> Self {
        Self {
            max_country_code_len: 2,
            area_min: 200,
            area_max: 900,
            repeat_run: 4,
        }
    }
}

/// Thresholds used by [`crate::core::validation::too_much_screen_time_with`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenTimeLimits {
    /// Any single day at or above this many hours is too much
    pub daily_max: f64,
    /// Number of consecutive days in the rolling window
    pub window_len: usize,
    /// Rolling-window average at or above this is too much
    pub window_avg: f64,
    /// Average over all days at or above this is too much
    pub overall_avg: f64,
}

impl Default for ScreenTimeLimits {
    fn default() -> Self {
        Self {
            daily_max: 10.0,
            window_len: 3,
            window_avg: 8.0,
            overall_avg: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilConfig {
    pub spam: SpamRules,
    pub screen_time: ScreenTimeLimits,
}

impl UtilConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations no input could satisfy sensibly
    pub fn validate(&self) -> Result<()> {
        if self.spam.area_min > self.spam.area_max {
            return Err(UtilError::config(format!(
                "spam.area_min ({}) is greater than spam.area_max ({})",
                self.spam.area_min, self.spam.area_max
            )));
        }
        if self.spam.repeat_run < 2 {
            return Err(UtilError::config("spam.repeat_run must be at least 2"));
        }
        if self.screen_time.window_len == 0 {
            return Err(UtilError::config(
                "screen_time.window_len must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UtilConfig::default();
        assert_eq!(config.spam.max_country_code_len, 2);
        assert_eq!(config.spam.area_min, 200);
        assert_eq!(config.spam.area_max, 900);
        assert_eq!(config.spam.repeat_run, 4);
        assert_eq!(config.screen_time.daily_max, 10.0);
        assert_eq!(config.screen_time.window_len, 3);
        assert_eq!(config.screen_time.window_avg, 8.0);
        assert_eq!(config.screen_time.overall_avg, 6.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = UtilConfig::from_toml_str(
            r#"
            [spam]
            area_max = 800

            [screen_time]
            daily_max = 12.0
            "#,
        )
        .unwrap();

        assert_eq!(config.spam.area_max, 800);
        assert_eq!(config.spam.area_min, 200);
        assert_eq!(config.screen_time.daily_max, 12.0);
        assert_eq!(config.screen_time.window_len, 3);
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(UtilConfig::from_toml_str("").unwrap(), UtilConfig::default());
        assert_eq!(UtilConfig::from_json_str("{}").unwrap(), UtilConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = UtilConfig::default();
        config.spam.repeat_run = 3;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(UtilConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_errors() {
        let err = UtilConfig::from_toml_str("[spam]\narea_min = 950").unwrap_err();
        assert!(err.to_string().contains("area_min"));

        let err = UtilConfig::from_toml_str("[spam]\nrepeat_run = 1").unwrap_err();
        assert!(err.to_string().contains("repeat_run"));

        let err = UtilConfig::from_json_str(r#"{"screen_time": {"window_len": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("window_len"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            UtilConfig::from_toml_str("[spam"),
            Err(UtilError::Config(_))
        ));
        assert!(matches!(
            UtilConfig::from_json_str("[1, 2"),
            Err(UtilError::Config(_))
        ));
    }
}
