//! Question store adapter for a PostgREST-style REST API

pub mod records;
pub mod store;

pub use store::{PostgrestQuestionStore, STORE_KEY_ENV, STORE_URL_ENV};
