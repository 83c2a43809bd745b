//! Generation configuration from TOML (`[generation]` section)

use eller_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Generation service configuration
///
/// The prompt itself is fixed in the engine; the file only tunes the model
/// and the sampling parameters.
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "gpt-3.5-turbo"
/// temperature = 1.1
/// max_tokens = 120
/// # api_url = "http://localhost:9000/v1"   # self-hosted endpoint
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Base URL override for the completions endpoint.
    pub api_url: Option<String>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            model: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            api_url: None,
        }
    }
}

impl FileGenerationConfig {
    pub fn params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_model(&self.model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eller_application::DEFAULT_PROMPT;

    #[test]
    fn test_defaults_match_engine_params() {
        let config = FileGenerationConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_params_keep_fixed_prompt() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[generation]
model = "gpt-4o-mini"
max_tokens = 80
"#,
        )
        .unwrap();

        let params = config.generation.params();
        assert_eq!(params.model, "gpt-4o-mini");
        assert_eq!(params.max_tokens, 80);
        // The prompt is not configurable
        assert_eq!(params.prompt, DEFAULT_PROMPT);
    }
}
