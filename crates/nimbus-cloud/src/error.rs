//! Cloud abstraction error types

use thiserror::Error;

/// Errors shared across all cloud providers
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("No provider context is configured")]
    NoContext,

    #[error("No such region: {0}")]
    RegionNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Operation not supported by this provider: {0}")]
    Unsupported(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
