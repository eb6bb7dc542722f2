//! Core error types for investlens-core.
//!
//! This module defines the error hierarchy using thiserror. Each domain
//! (API client, configuration, input validation, wizard) has its own enum,
//! folded into [`CoreError`] for callers that want a single error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::WizardError;

/// Core error type for investlens-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Wizard state machine errors
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from calls to the backend analytics service.
///
/// Every variant is recoverable: a failed request must never corrupt the
/// caller's state, and the CLI surfaces these as retry prompts.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed or joined
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Failed to construct the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status} from {endpoint}")]
    Http { status: u16, endpoint: String },

    /// Request exceeded the configured timeout
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// Connection-level failure
    #[error("Transport error for {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the expected shape
    #[error("Malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No platform configuration directory available
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

/// Validation errors for user-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Numeric field outside its allowed range
    #[error("Invalid value for '{field}': {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
