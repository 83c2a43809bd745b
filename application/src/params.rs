//! Engine parameters — sourcing policy and generation request shape.
//!
//! These are application-layer concerns: they control how the use cases
//! behave, not what the domain entities mean.

use crate::ports::generation_gateway::CompletionRequest;
use serde::{Deserialize, Serialize};

/// Prompt template asking for exactly two labeled alternatives in Swedish.
pub const DEFAULT_PROMPT: &str = "Skriv ett 'antingen eller'-scenario med två alternativ. \
Svara exakt i formatet:\nAlternativ 1: ...\nAlternativ 2: ...";

/// Sourcing policy parameters.
///
/// `reuse_probability` is the chance that the next question is drawn from
/// previously stored questions instead of freshly generated. `0.0`
/// degrades to always-generate, which is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcingParams {
    /// Chance in `[0, 1]` of attempting reuse.
    pub reuse_probability: f64,
    /// Bound on reuse draws before falling back to generation.
    pub max_reuse_attempts: usize,
}

impl Default for SourcingParams {
    fn default() -> Self {
        Self {
            reuse_probability: 0.3,
            max_reuse_attempts: 5,
        }
    }
}

impl SourcingParams {
    // ==================== Builder Methods ====================

    /// Set the reuse probability, clamped to `[0, 1]`.
    pub fn with_reuse_probability(mut self, probability: f64) -> Self {
        self.reuse_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_reuse_attempts(mut self, attempts: usize) -> Self {
        self.max_reuse_attempts = attempts;
        self
    }
}

/// Fixed request shape sent to the generation service.
///
/// High temperature for variety, short completions — the service is asked
/// for exactly two labeled alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            temperature: 1.1,
            max_tokens: 120,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl From<&GenerationParams> for CompletionRequest {
    fn from(params: &GenerationParams) -> Self {
        CompletionRequest {
            model: params.model.clone(),
            prompt: params.prompt.clone(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sourcing_defaults() {
        let params = SourcingParams::default();
        assert_eq!(params.reuse_probability, 0.3);
        assert_eq!(params.max_reuse_attempts, 5);
    }

    #[test]
    fn test_reuse_probability_clamped() {
        assert_eq!(
            SourcingParams::default()
                .with_reuse_probability(1.7)
                .reuse_probability,
            1.0
        );
        assert_eq!(
            SourcingParams::default()
                .with_reuse_probability(-0.2)
                .reuse_probability,
            0.0
        );
        // Zero is a valid configuration, not an error
        assert_eq!(
            SourcingParams::default()
                .with_reuse_probability(0.0)
                .reuse_probability,
            0.0
        );
    }

    #[test]
    fn test_generation_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.model, "gpt-3.5-turbo");
        assert!(params.prompt.contains("Alternativ 1:"));
        assert!(params.prompt.contains("Alternativ 2:"));
        assert_eq!(params.max_tokens, 120);
    }

    #[test]
    fn test_completion_request_from_params() {
        let params = GenerationParams::default().with_model("test-model");
        let request = CompletionRequest::from(&params);
        assert_eq!(request.model, "test-model");
        assert_eq!(request.prompt, params.prompt);
    }
}
