use thiserror::Error;

/// Validation and contract errors exposed by `tickerdash-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("please enter at least one ticker")]
    EmptySubmission,

    #[error("invalid range '{value}', expected one of 1d, 1w, 1m, 1y, all")]
    InvalidRange { value: String },
    #[error("invalid theme '{value}', expected light or dark")]
    InvalidTheme { value: String },
    #[error("invalid tab '{value}', expected tracker or news")]
    InvalidTab { value: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("earnings event for '{ticker}' is missing a company name")]
    EmptyCompanyName { ticker: String },
}

/// Failures of the key-value preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preference store at {path} is not valid JSON: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to read earnings calendar {path}: {source}")]
    EarningsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
