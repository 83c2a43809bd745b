//! HTTP client for the chat completions endpoint.

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use eller_application::{CompletionRequest, GenerationError, GenerationGateway};
use tracing::debug;

/// Default public endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable carrying the bearer credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Generation gateway backed by an OpenAI-style chat completions API.
///
/// One outbound request per [`complete`](GenerationGateway::complete) call.
/// The bearer credential comes from the process environment; the base URL
/// can be overridden for self-hosted endpoints and tests.
pub struct OpenAiGenerationGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGenerationGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read the credential from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GenerationError::MissingCredential(API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerationGateway for OpenAiGenerationGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatCompletionRequest::from(request);
        debug!(model = %body.model, "Requesting completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        match parsed.first_content() {
            Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
            _ => Err(GenerationError::EmptyCompletion),
        }
    }
}
