use registry_console_core::{ConsoleError, GatewayError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("Invalid server URL {url}: {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Schema generation failed: {0}")]
    SchemaGeneration(String),

    #[error("Invalid schema directory: {path}")]
    InvalidSchemaDirectory { path: PathBuf },
}

impl CliError {
    pub fn invalid_directory(path: PathBuf) -> Self {
        CliError::InvalidSchemaDirectory { path }
    }

    pub fn invalid_url(url: &str, reason: impl ToString) -> Self {
        CliError::InvalidServerUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
