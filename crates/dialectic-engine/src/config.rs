//! Configuration for the dialectical engine
//!
//! Aggregates the component configs so one TOML file tunes the whole engine.

use crate::ConfigError;
use dialectic_evaluator::EvaluatorConfig;
use dialectic_synthesizer::SynthesizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the [`DialecticalEngine`](crate::DialecticalEngine)
///
/// Every section is optional in TOML; missing values fall back to defaults.
///
/// # Examples
///
/// ```
/// use dialectic_engine::EngineConfig;
///
/// let config = EngineConfig::from_toml_str(r#"
///     max_path_nodes = 12
///
///     [evaluator]
///     weak_logic_threshold = 0.35
/// "#).unwrap();
/// assert_eq!(config.max_path_nodes, Some(12));
/// assert_eq!(config.evaluator.weak_logic_threshold, 0.35);
/// assert_eq!(config.synthesizer.min_theme_len, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest path (in nodes) that path search will explore
    /// Default: unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_path_nodes: Option<usize>,

    /// Scoring weights and thresholds
    pub evaluator: EvaluatorConfig,

    /// Theme bounds, confidence terms and quality weights
    pub synthesizer: SynthesizerConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Check every component config
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.evaluator
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("evaluator: {}", e)))?;
        self.synthesizer
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("synthesizer: {}", e)))?;
        if self.max_path_nodes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_path_nodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
