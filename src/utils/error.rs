use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}")]
    BackendStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Missing required field(s): {fields}")]
    MissingFields { fields: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
