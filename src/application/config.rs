use serde::Deserialize;
use thiserror::Error;

use crate::domain::{MAX_NEIGHBORS, StepStrategy};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options recognized by the cellular automaton generator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Chance in percent that a seeded cell starts as Ground
    pub random_fill_percent: i32,
    /// Derive the seed from the clock instead of `seed`
    pub use_random_seed: bool,
    pub seed: i64,
    pub iterations: u32,
    /// Ground-neighbor count at which a cell becomes Ground
    pub ground_threshold: i32,
    /// Pause after each apply pass; 0 yields once instead
    pub step_delay_ms: u64,
    pub step_strategy: StepStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            random_fill_percent: 48,
            use_random_seed: true,
            seed: 12345,
            iterations: 5,
            ground_threshold: 4,
            step_delay_ms: 0,
            step_strategy: StepStrategy::Serial,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fixed-seed configuration, handy for reproducible hosts and tests
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.use_random_seed = false;
        self.seed = seed;
        self
    }

    /// Copy with fill clamped to [0, 100] and threshold clamped to [0, 8]
    pub fn sanitized(&self) -> Self {
        let fill = self.random_fill_percent.clamp(0, 100);
        if fill != self.random_fill_percent {
            log::warn!("randomFillPercent {} clamped to {}", self.random_fill_percent, fill);
        }

        let threshold = self.ground_threshold.clamp(0, i32::from(MAX_NEIGHBORS));
        if threshold != self.ground_threshold {
            log::warn!("groundThreshold {} clamped to {}", self.ground_threshold, threshold);
        }

        Self {
            random_fill_percent: fill,
            ground_threshold: threshold,
            ..self.clone()
        }
    }

    /// Fill percent as the seeder takes it. Only meaningful once sanitized.
    pub fn fill_percent(&self) -> u8 {
        self.random_fill_percent.clamp(0, 100) as u8
    }

    /// Threshold as the rule takes it. Only meaningful once sanitized.
    pub fn threshold(&self) -> u8 {
        self.ground_threshold.clamp(0, i32::from(MAX_NEIGHBORS)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.random_fill_percent, 48);
        assert!(config.use_random_seed);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.ground_threshold, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(
            r#"{ "randomFillPercent": 55, "useRandomSeed": false, "stepStrategy": "parallel" }"#,
        )
        .unwrap();

        assert_eq!(config.random_fill_percent, 55);
        assert!(!config.use_random_seed);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.step_strategy, StepStrategy::Parallel);
    }

    #[test]
    fn test_malformed_json() {
        let result = GeneratorConfig::from_json_str(r#"{ "iterations": -1 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = GeneratorConfig {
            random_fill_percent: 140,
            ground_threshold: -3,
            ..GeneratorConfig::default()
        }
        .sanitized();
        assert_eq!(config.random_fill_percent, 100);
        assert_eq!(config.ground_threshold, 0);

        let config = GeneratorConfig {
            random_fill_percent: -5,
            ground_threshold: 12,
            ..GeneratorConfig::default()
        }
        .sanitized();
        assert_eq!(config.fill_percent(), 0);
        assert_eq!(config.threshold(), 8);
    }

    #[test]
    fn test_negative_seed() {
        let config = GeneratorConfig::from_json_str(r#"{ "seed": -7, "useRandomSeed": false }"#).unwrap();
        assert_eq!(config.seed, -7);
        assert!(!config.use_random_seed);
    }

    #[test]
    fn test_with_seed() {
        let config = GeneratorConfig::default().with_seed(7);
        assert!(!config.use_random_seed);
        assert_eq!(config.seed, 7);
    }
}
