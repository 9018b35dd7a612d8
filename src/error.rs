//! Error types for intelsync
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Collaborators (page fetchers, batch submitters) report their failures
//! through the same type so the engines can tell transient faults from
//! fatal ones via [`Error::is_retryable`].

use crate::types::Timestamp;
use thiserror::Error;

/// The main error type for intelsync
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error(
        "to_time should not increase between page iterations ({previous} -> {next}); \
         continuing could loop forever"
    )]
    ToTimeIncreased { previous: Timestamp, next: Timestamp },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    #[error("Transient failure: {message}")]
    Transient { message: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Page fetch failed: {message}")]
    Fetch { message: String },

    #[error("Batch submission failed: {message}")]
    Batch { message: String, retryable: bool },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Invalid timestamp '{input}': {message}")]
    InvalidTimestamp { input: String, message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a transient (retryable) error
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Create a fatal fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a batch error caused by the batch content
    pub fn batch(message: impl Into<String>) -> Self {
        Self::Batch {
            message: message.into(),
            retryable: false,
        }
    }

    /// Create a batch error caused by infrastructure, worth retrying as-is
    pub fn batch_transient(message: impl Into<String>) -> Self {
        Self::Batch {
            message: message.into(),
            retryable: true,
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transient { .. } | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::Batch { retryable, .. } => *retryable,
            _ => false,
        }
    }

    /// Check if this error is a broken continuation contract
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Error::ToTimeIncreased { .. })
    }
}

/// Result type alias for intelsync
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
