//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileGenerationConfig, FileSourcingConfig, FileStoreConfig};
pub use loader::ConfigLoader;
