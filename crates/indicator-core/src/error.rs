//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Adapter(#[from] indicator_foundation::AdapterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
