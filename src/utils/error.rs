use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No {kind} named '{name}' is configured")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} index {index} is out of range (count: {count})")]
    OutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },

    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Response body truncated: expected {expected} bytes, received {received}")]
    StreamTruncated { expected: u64, received: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
