use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response from API: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Project not found: #{0}")]
    ProjectNotFound(i64),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Offers can only be sent for pending projects (project #{id} is '{status}')")]
    NotPending { id: i64, status: String },

    #[error("Invalid refresh interval '{0}': expected whole seconds")]
    InvalidInterval(String),

    #[error("Both --price and --delivery must be non-empty")]
    MissingOfferFields,
}

pub type Result<T> = std::result::Result<T, AdminError>;
