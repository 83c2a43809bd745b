//! Generation gateway adapter for an OpenAI-style chat completions API

pub mod client;
pub mod protocol;

pub use client::{API_KEY_ENV, OpenAiGenerationGateway};
