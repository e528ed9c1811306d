//! Brightbox provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrightboxError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Brightbox API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cloud error: {0}")]
    Cloud(#[from] nimbus_cloud::CloudError),
}

pub type Result<T> = std::result::Result<T, BrightboxError>;
