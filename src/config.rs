//! Run configuration
//!
//! Read from environment variables, all optional:
//! - `AQI_SEED`: RNG seed (random when unset)
//! - `AQI_SAMPLE_COUNT`: dataset size, default 1500
//! - `AQI_TRAIN_FRACTION`: leading share used as train partition, default 0.8
//! - `AQI_REPORT_FORMAT`: `text` (default), `markdown` or `json`

use crate::evaluation::{EvaluationSettings, DEFAULT_SAMPLE_COUNT, DEFAULT_TRAIN_FRACTION};
use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;

pub const SEED_VAR: &str = "AQI_SEED";
pub const SAMPLE_COUNT_VAR: &str = "AQI_SAMPLE_COUNT";
pub const TRAIN_FRACTION_VAR: &str = "AQI_TRAIN_FRACTION";
pub const REPORT_FORMAT_VAR: &str = "AQI_REPORT_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => bail!("Unknown report format '{}' (expected text, markdown or json)", other),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub sample_count: usize,
    pub train_fraction: f64,
    pub format: ReportFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sample_count: DEFAULT_SAMPLE_COUNT,
            train_fraction: DEFAULT_TRAIN_FRACTION,
            format: ReportFormat::Text,
        }
    }
}

impl RunConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{} must be an unsigned integer, got '{}'", SEED_VAR, raw))?,
            );
        }

        if let Some(raw) = lookup(SAMPLE_COUNT_VAR) {
            config.sample_count = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be an unsigned integer, got '{}'", SAMPLE_COUNT_VAR, raw))?;
            if config.sample_count == 0 {
                bail!("{} must be at least 1", SAMPLE_COUNT_VAR);
            }
        }

        if let Some(raw) = lookup(TRAIN_FRACTION_VAR) {
            config.train_fraction = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number, got '{}'", TRAIN_FRACTION_VAR, raw))?;
            if !(0.0..1.0).contains(&config.train_fraction) {
                bail!(
                    "{} must be in [0, 1), got {}",
                    TRAIN_FRACTION_VAR,
                    config.train_fraction
                );
            }
        }

        if let Some(raw) = lookup(REPORT_FORMAT_VAR) {
            config.format = raw
                .parse()
                .with_context(|| format!("Invalid {}", REPORT_FORMAT_VAR))?;
        }

        Ok(config)
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn evaluation_settings(&self, seed: u64) -> EvaluationSettings {
        EvaluationSettings {
            sample_count: self.sample_count,
            train_fraction: self.train_fraction,
            seed: Some(seed),
            ..EvaluationSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RunConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.sample_count, 1500);
        assert_eq!(config.train_fraction, 0.8);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (SEED_VAR, "42"),
            (SAMPLE_COUNT_VAR, " 200 "),
            (TRAIN_FRACTION_VAR, "0.5"),
            (REPORT_FORMAT_VAR, "JSON"),
        ])
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.sample_count, 200);
        assert_eq!(config.train_fraction, 0.5);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.seed_or_random(), 42);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[(SEED_VAR, "-3")]).is_err());
        assert!(config_from(&[(SAMPLE_COUNT_VAR, "0")]).is_err());
        assert!(config_from(&[(SAMPLE_COUNT_VAR, "many")]).is_err());
        assert!(config_from(&[(TRAIN_FRACTION_VAR, "1.0")]).is_err());
        assert!(config_from(&[(TRAIN_FRACTION_VAR, "-0.1")]).is_err());
        assert!(config_from(&[(REPORT_FORMAT_VAR, "html")]).is_err());
    }

    #[test]
    fn test_report_format_aliases() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("Text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_evaluation_settings() {
        let config = config_from(&[(SAMPLE_COUNT_VAR, "100")]).unwrap();
        let settings = config.evaluation_settings(7);
        assert_eq!(settings.sample_count, 100);
        assert_eq!(settings.seed, Some(7));
    }
}
