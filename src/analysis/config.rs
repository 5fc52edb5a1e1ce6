// Threshold configuration for salient-commit detection
//
// Thresholds are resolved once by the caller (defaults, TOML file, CLI flags)
// and passed explicitly into the statistics engine and classifier.

use crate::error::{AnalysisError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default tolerated runtime growth between adjacent commits (seconds)
pub const DEFAULT_DELTA_THRESHOLD: f64 = 2.0;

/// Default tolerated current/previous measurement ratio
pub const DEFAULT_SPEEDUP_THRESHOLD: f64 = 2.0;

/// Configuration for salient-commit detection
///
/// A commit is salient when its delta exceeds `delta_threshold` or its
/// speedup exceeds `speedup_threshold`.
///
/// # Example
/// ```
/// use benchsift::analysis::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.delta_threshold, 2.0);
/// assert_eq!(config.speedup_threshold, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Tolerated signed difference `current - previous`
    ///
    /// Expressed in the unit of the measurement: seconds for functional
    /// tests, the score unit for microbenchmarks.
    pub delta_threshold: f64,

    /// Tolerated ratio `current / previous`
    ///
    /// For time-based measurements a value above 1.0 means the current
    /// commit is slower than its predecessor.
    pub speedup_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delta_threshold: DEFAULT_DELTA_THRESHOLD,
            speedup_threshold: DEFAULT_SPEEDUP_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn new(delta_threshold: f64, speedup_threshold: f64) -> Self {
        Self {
            delta_threshold,
            speedup_threshold,
        }
    }

    /// Flag smaller changes (more salient commits)
    pub fn strict() -> Self {
        Self {
            delta_threshold: 1.0,
            speedup_threshold: 1.5,
        }
    }

    /// Only flag large changes (fewer salient commits)
    pub fn permissive() -> Self {
        Self {
            delta_threshold: 5.0,
            speedup_threshold: 3.0,
        }
    }

    /// Override individual thresholds, keeping the rest
    pub fn with_overrides(mut self, delta: Option<f64>, speedup: Option<f64>) -> Self {
        if let Some(delta) = delta {
            self.delta_threshold = delta;
        }
        if let Some(speedup) = speedup {
            self.speedup_threshold = speedup;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.delta_threshold.is_finite() {
            return Err(AnalysisError::InvalidConfig(format!(
                "delta_threshold must be finite, got {}",
                self.delta_threshold
            )));
        }

        if !self.speedup_threshold.is_finite() || self.speedup_threshold < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "speedup_threshold must be a finite non-negative ratio, got {}",
                self.speedup_threshold
            )));
        }

        Ok(())
    }

    /// Parse thresholds from a TOML document
    ///
    /// ```toml
    /// delta_threshold = 1.5
    /// speedup_threshold = 1.2
    /// ```
    /// Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load thresholds from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.delta_threshold, 2.0);
        assert_eq!(config.speedup_threshold, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = AnalyzerConfig::strict();
        assert_eq!(config.delta_threshold, 1.0);
        assert_eq!(config.speedup_threshold, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = AnalyzerConfig::permissive();
        assert_eq!(config.delta_threshold, 5.0);
        assert_eq!(config.speedup_threshold, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_overrides() {
        let config = AnalyzerConfig::default().with_overrides(Some(0.5), None);
        assert_eq!(config.delta_threshold, 0.5);
        assert_eq!(config.speedup_threshold, 2.0);

        let config = AnalyzerConfig::default().with_overrides(None, Some(1.1));
        assert_eq!(config.delta_threshold, 2.0);
        assert_eq!(config.speedup_threshold, 1.1);
    }

    #[test]
    fn test_negative_delta_threshold_is_valid() {
        let config = AnalyzerConfig::new(-1.0, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_delta_threshold() {
        let config = AnalyzerConfig::new(f64::NAN, 2.0);
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_speedup_threshold() {
        assert!(AnalyzerConfig::new(2.0, -0.1).validate().is_err());
        assert!(AnalyzerConfig::new(2.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AnalyzerConfig::from_toml_str("speedup_threshold = 1.25\n").unwrap();
        assert_eq!(config.delta_threshold, 2.0);
        assert_eq!(config.speedup_threshold, 1.25);
    }

    #[test]
    fn test_from_toml_full() {
        let config =
            AnalyzerConfig::from_toml_str("delta_threshold = 0.75\nspeedup_threshold = 3.0\n")
                .unwrap();
        assert_eq!(config, AnalyzerConfig::new(0.75, 3.0));
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(AnalyzerConfig::from_toml_str("speedup_threshold = -2.0\n").is_err());
        assert!(AnalyzerConfig::from_toml_str("delta_threshold = \"two\"\n").is_err());
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = AnalyzerConfig::from_toml_file("/nonexistent/benchsift.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
