//! Typed view of the configuration file
//!
//! Example:
//!
//! ```toml
//! [sourcing]
//! reuse_probability = 0.3
//!
//! [generation]
//! model = "gpt-3.5-turbo"
//! max_tokens = 120
//!
//! [store]
//! url = "https://project.example.co"
//! ```
//!
//! Credentials never live here; they come from the process environment.

pub mod generation;
pub mod sourcing;
pub mod store;

pub use generation::FileGenerationConfig;
pub use sourcing::FileSourcingConfig;
pub use store::FileStoreConfig;

use eller_application::{GenerationParams, SourcingParams};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub sourcing: FileSourcingConfig,
    pub generation: FileGenerationConfig,
    pub store: FileStoreConfig,
}

impl FileConfig {
    /// Engine sourcing parameters from the `[sourcing]` section.
    pub fn sourcing_params(&self) -> SourcingParams {
        self.sourcing.params()
    }

    /// Generation request parameters from the `[generation]` section.
    pub fn generation_params(&self) -> GenerationParams {
        self.generation.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = FileConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[sourcing]
reuse_probability = 0.5
"#,
        )
        .unwrap();

        assert_eq!(config.sourcing.reuse_probability, 0.5);
        // Untouched sections keep their defaults
        assert_eq!(config.generation, FileGenerationConfig::default());
        assert_eq!(config.store, FileStoreConfig::default());
    }
}
