//! Generation gateway port
//!
//! Defines the interface for requesting a completion from the external
//! generative text service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when requesting a completion
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Service error (status {status}): {message}")]
    ServiceError { status: u16, message: String },

    #[error("Empty completion")]
    EmptyCompletion,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),
}

/// One completion request with fixed prompt and sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Gateway to the generative text service
///
/// One outbound request per call; authentication is the adapter's concern
/// (bearer credential from the process environment, never hard-coded).
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Request a single free-text completion.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;
}
