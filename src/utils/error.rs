use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("item {id} returned HTTP {status}")]
    HttpStatusError { id: u64, status: reqwest::StatusCode },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("could not extract a thread ID from '{input}'")]
    ThreadIdError { input: String },

    #[error("failed to fetch thread {id}")]
    RootFetchError { id: u64 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logging setup failed: {message}")]
    LoggingError { message: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
