use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::util::errors::{CommitmentError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "commitment.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub debug_mode: bool,
}

/// Tuning for the simulated submitter used when no real transaction backend is wired in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub latency_ms: u64,
    /// When set, every simulated submission fails with this message.
    pub forced_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub application: ApplicationConfig,
    pub submission: SubmissionConfig,
    pub ui: UiConfig,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            name: "Commitment Review".to_string(),
            debug_mode: false,
        }
    }
}

impl ApplicationConfig {
    /// Default log filter for hosts when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug_mode {
            "debug"
        } else {
            "info"
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        SubmissionConfig {
            latency_ms: 1500,
            forced_error: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark_mode: true,
            window_width: 900.0,
            window_height: 1000.0,
        }
    }
}

impl Config {
    /// Load `path` (or `commitment.toml`) and apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CommitmentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a variable lookup; `lookup` is `std::env::var` outside tests.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(latency) = lookup("COMMITMENT_SUBMIT_LATENCY_MS") {
            match latency.parse::<u64>() {
                Ok(ms) => self.submission.latency_ms = ms,
                Err(_) => tracing::warn!(value = %latency, "ignoring invalid COMMITMENT_SUBMIT_LATENCY_MS"),
            }
        }

        if let Some(error) = lookup("COMMITMENT_SUBMIT_ERROR") {
            self.submission.forced_error = if error.is_empty() { None } else { Some(error) };
        }

        if let Some(dark) = lookup("COMMITMENT_DARK_MODE") {
            self.ui.dark_mode = parse_flag(&dark);
        }

        if let Some(debug) = lookup("DEBUG") {
            self.application.debug_mode = parse_flag(&debug);
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.submission.latency_ms, 1500);
        assert!(config.submission.forced_error.is_none());
        assert!(config.ui.dark_mode);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [submission]
            forced_error = "Insufficient balance"
            "#,
        )
        .unwrap();

        assert_eq!(config.submission.forced_error.as_deref(), Some("Insufficient balance"));
        assert_eq!(config.submission.latency_ms, 1500);
        assert_eq!(config.application, ApplicationConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Config::from_toml_str("[submission\nlatency_ms = 1").unwrap_err();
        assert!(matches!(err, CommitmentError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("COMMITMENT_SUBMIT_LATENCY_MS", "0"),
            ("COMMITMENT_SUBMIT_ERROR", "Network congested"),
            ("COMMITMENT_DARK_MODE", "false"),
            ("DEBUG", "1"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.submission.latency_ms, 0);
        assert_eq!(config.submission.forced_error.as_deref(), Some("Network congested"));
        assert!(!config.ui.dark_mode);
        assert!(config.application.debug_mode);
    }

    #[test]
    fn test_debug_mode_selects_log_level() {
        let mut config = Config::default();
        assert_eq!(config.application.log_level(), "info");

        config.apply_overrides(|key| (key == "DEBUG").then(|| "true".to_string()));
        assert_eq!(config.application.log_level(), "debug");

        let config = Config::from_toml_str("[application]\ndebug_mode = true\n").unwrap();
        assert_eq!(config.application.log_level(), "debug");
    }

    #[test]
    fn test_invalid_latency_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == "COMMITMENT_SUBMIT_LATENCY_MS").then(|| "soon".to_string())
        });
        assert_eq!(config.submission.latency_ms, 1500);
    }

    #[test]
    fn test_serialize_error_is_a_config_error() {
        let err: CommitmentError =
            <toml::ser::Error as serde::ser::Error>::custom("unsupported value").into();
        assert!(matches!(err, CommitmentError::ConfigSerialize(_)));
        assert!(err.to_string().starts_with("failed to serialize config"));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = Config::default().to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
