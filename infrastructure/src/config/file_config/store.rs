//! Store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};

/// Backing store configuration
///
/// Only the project base URL lives in the file; the API key always comes
/// from the environment.
///
/// # Example
///
/// ```toml
/// [store]
/// url = "https://project.example.co"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Project base URL; falls back to the environment when absent.
    pub url: Option<String>,
}
