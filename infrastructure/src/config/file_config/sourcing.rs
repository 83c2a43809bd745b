//! Sourcing configuration from TOML (`[sourcing]` section)

use eller_application::SourcingParams;
use serde::{Deserialize, Serialize};

/// Sourcing policy configuration
///
/// # Example
///
/// ```toml
/// [sourcing]
/// reuse_probability = 0.3   # 0.0 means always generate
/// max_reuse_attempts = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcingConfig {
    /// Chance in `[0, 1]` that the next question is reused from the store.
    pub reuse_probability: f64,
    /// Reuse draws before falling back to generation.
    pub max_reuse_attempts: usize,
}

impl Default for FileSourcingConfig {
    fn default() -> Self {
        Self {
            reuse_probability: 0.3,
            max_reuse_attempts: 5,
        }
    }
}

impl FileSourcingConfig {
    /// Convert into engine parameters; the probability is clamped there.
    pub fn params(&self) -> SourcingParams {
        SourcingParams::default()
            .with_reuse_probability(self.reuse_probability)
            .with_max_reuse_attempts(self.max_reuse_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileSourcingConfig::default();
        assert_eq!(config.reuse_probability, 0.3);
        assert_eq!(config.max_reuse_attempts, 5);
    }

    #[test]
    fn test_deserialize() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[sourcing]
reuse_probability = 0.0
max_reuse_attempts = 3
"#,
        )
        .unwrap();
        assert_eq!(config.sourcing.reuse_probability, 0.0);
        assert_eq!(config.sourcing.max_reuse_attempts, 3);
    }

    #[test]
    fn test_out_of_range_probability_is_clamped_in_params() {
        let config = FileSourcingConfig {
            reuse_probability: 2.5,
            max_reuse_attempts: 5,
        };
        assert_eq!(config.params().reuse_probability, 1.0);
    }
}
