// src/error.rs

use thiserror::Error;

/// Failure of a single upstream call (quote or overview).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("No data received")]
    NoData,
    #[error("Failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API call limit reached: {0}")]
    RateLimited(String),
    #[error("Symbol mismatch for {requested}: quote was for {quote}, overview was for {overview}")]
    SymbolMismatch {
        requested: String,
        quote: String,
        overview: String,
    },
}

impl ApiError {
    /// True when the failure happened below the HTTP payload (connect, read, status).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited(_))
    }
}

/// Aggregate outcome of a fleet pass in which no symbol succeeded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("No stock data available")]
    NoDataAvailable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Stock list store is no longer running")]
    Closed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
