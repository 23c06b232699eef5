//! Error types of the artwork grid.
//!
//! None of these are fatal: the list view turns them into notifications and
//! stays interactive.

use thiserror::Error;

/// Failure of a single page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The catalog answered with a non-success status
    #[error("API error: {0}")]
    HttpStatus(u16),
    /// The body could not be decoded into the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The exchange with the catalog broke off (offline, CORS, aborted body)
    #[error("Failed to send request: {0}")]
    Transport(String),
}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please provide a valid number")]
    InvalidCount,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
