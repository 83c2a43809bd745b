//! Infrastructure layer for antingen-eller
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer — the chat-completion generation gateway, the
//! PostgREST question store, the rand-backed randomness source — plus
//! configuration file loading.

pub mod config;
pub mod openai;
pub mod postgrest;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileSourcingConfig, FileStoreConfig,
};
pub use openai::{API_KEY_ENV, OpenAiGenerationGateway};
pub use postgrest::{PostgrestQuestionStore, STORE_KEY_ENV, STORE_URL_ENV};
pub use random::ThreadRngSource;
