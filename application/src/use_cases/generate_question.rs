//! Generate Question use case.
//!
//! Requests one completion from the generation service and parses it into
//! a two-option pair. Every failure — transport, service, empty or
//! malformed body — is absorbed into a fixed fallback pair; callers never
//! special-case generation failure.

use crate::params::GenerationParams;
use crate::ports::generation_gateway::{CompletionRequest, GenerationGateway};
use eller_domain::{AlternativePair, parse_alternatives};
use std::sync::Arc;
use tracing::{debug, warn};

/// First option of the fallback pair served when generation fails.
pub const FALLBACK_OPTION1: &str = "Fel vid hämtning";
/// Second option of the fallback pair served when generation fails.
pub const FALLBACK_OPTION2: &str = "Försök igen senare";

/// A freshly generated pair, zero votes implied.
///
/// `degraded` marks the fixed transport-failure fallback. A degraded pair
/// is displayable like any other, but the sourcing engine keeps it out of
/// the store so it never enters the reuse pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub option1: String,
    pub option2: String,
    pub degraded: bool,
}

impl GeneratedQuestion {
    fn from_pair(pair: AlternativePair) -> Self {
        Self {
            option1: pair.option1,
            option2: pair.option2,
            degraded: false,
        }
    }

    fn fallback() -> Self {
        Self {
            option1: FALLBACK_OPTION1.to_string(),
            option2: FALLBACK_OPTION2.to_string(),
            degraded: true,
        }
    }
}

/// Use case for synthesizing a new question.
pub struct GenerateQuestionUseCase {
    gateway: Arc<dyn GenerationGateway>,
    params: GenerationParams,
}

impl GenerateQuestionUseCase {
    pub fn new(gateway: Arc<dyn GenerationGateway>, params: GenerationParams) -> Self {
        Self { gateway, params }
    }

    /// Produce a displayable pair. Never fails; the worst outcome is the
    /// degraded fallback pair.
    pub async fn execute(&self) -> GeneratedQuestion {
        let request = CompletionRequest::from(&self.params);
        match self.gateway.complete(&request).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Generation service returned an empty completion, serving fallback pair");
                GeneratedQuestion::fallback()
            }
            Ok(text) => {
                debug!(bytes = text.len(), "Parsing completion into alternatives");
                GeneratedQuestion::from_pair(parse_alternatives(&text))
            }
            Err(e) => {
                warn!("Generation failed, serving fallback pair: {}", e);
                GeneratedQuestion::fallback()
            }
        }
    }
}
