use thiserror::Error;

/// Error types for MAC address parsing and generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacError {
    /// The input matched none of the accepted MAC address notations.
    #[error("Invalid MAC address: {0}")]
    InvalidAddress(String),

    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for MAC address operations.
pub type MacResult<T> = Result<T, MacError>;
