//! Configuration types for the engines
//!
//! All structures deserialize with sensible defaults so a caller can embed
//! them in whatever configuration format their application already uses.

use crate::error::{Error, Result};
use crate::fetch::RateLimiterConfig;
use crate::types::{BackoffType, Timestamp, DAY_MILLIS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Top-Level Engine Config
// ============================================================================

/// Configuration shared by a client's pagination and batch engines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Batch isolation settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Optional client-side rate limit applied to collaborator calls
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl EngineConfig {
    /// Parse a config from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()?;
        self.batch.validate()?;
        if let Some(rate_limit) = &self.rate_limit {
            if rate_limit.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be at least 1",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Defaults for the paginators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// First page number for offset pagination
    #[serde(default)]
    pub start_page: u32,

    /// Width of the default time window when no from_time is given
    #[serde(default = "default_window_millis")]
    pub window_millis: Timestamp,
}

fn default_page_size() -> u32 {
    25
}

fn default_window_millis() -> Timestamp {
    DAY_MILLIS
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            start_page: 0,
            window_millis: default_window_millis(),
        }
    }
}

impl PaginationConfig {
    /// Validate the pagination defaults
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.window_millis <= 0 {
            return Err(Error::invalid_value(
                "window_millis",
                "must be a positive duration",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Batch Config
// ============================================================================

/// Settings for batch fault isolation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Largest batch submitted in one call
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Retry policy for transient submission failures
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_max_batch_size() -> usize {
    1000
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            retry: RetryPolicy::default(),
        }
    }
}

impl BatchConfig {
    /// Validate the batch settings
    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(Error::invalid_value(
                "max_batch_size",
                "must be at least 1",
            ));
        }
        self.retry.validate()
    }
}

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry behaviour for retryable collaborator errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Backoff strategy
    #[serde(default)]
    pub backoff_type: BackoffType,
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            backoff_type: BackoffType::default(),
        }
    }
}

impl RetryPolicy {
    /// Never retry
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Set max retries
    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set backoff configuration
    #[must_use]
    pub fn with_backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.backoff_type = backoff_type;
        self.initial_backoff_ms = initial.as_millis() as u64;
        self.max_backoff_ms = max.as_millis() as u64;
        self
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<()> {
        if self.initial_backoff_ms > self.max_backoff_ms {
            return Err(Error::invalid_value(
                "retry.initial_backoff_ms",
                "must not exceed max_backoff_ms",
            ));
        }
        Ok(())
    }

    /// Calculate backoff delay for a given attempt (0-based)
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let initial = Duration::from_millis(self.initial_backoff_ms);
        let delay = match self.backoff_type {
            BackoffType::Constant => initial,
            BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                initial.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, Duration::from_millis(self.max_backoff_ms))
    }

    /// Delay before retrying after `error`, honouring a server `Retry-After`
    pub fn delay_for(&self, error: &Error, attempt: u32) -> Duration {
        match error {
            Error::RateLimited {
                retry_after_seconds,
            } => Duration::from_secs(*retry_after_seconds),
            _ => self.calculate_backoff(attempt),
        }
    }
}
