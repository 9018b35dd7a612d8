//! Common types used throughout intelsync
//!
//! This module contains shared type definitions, type aliases,
//! and the time helpers used by the time-window paginator.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// One day in milliseconds
pub const DAY_MILLIS: Timestamp = 24 * 60 * 60 * 1000;

/// Integers below this are taken to be seconds rather than milliseconds
const SECONDS_THRESHOLD: i64 = 10_000_000_000;

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Time Helpers
// ============================================================================

/// Current time in milliseconds since epoch
pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Normalize an integer epoch value to milliseconds.
///
/// Values with fewer than 11 digits are treated as seconds. Timestamps in
/// the future are rejected.
pub fn epoch_to_millis(value: i64) -> Result<Timestamp> {
    let millis = if value.unsigned_abs() < SECONDS_THRESHOLD.unsigned_abs() {
        value * 1000
    } else {
        value
    };

    if millis > now_millis() {
        return Err(Error::invalid_timestamp(
            value.to_string(),
            "timestamp is in the future",
        ));
    }

    Ok(millis)
}

/// Parse a user supplied timestamp into milliseconds since epoch.
///
/// Accepts epoch seconds or milliseconds (`1487890914`, `1487890914000`),
/// RFC 3339 (`2017-02-23T23:01:54Z`), ISO 8601 with a compact offset
/// (`2017-02-23T23:01:54+0000`) and naive date-times, which are read as UTC.
pub fn normalize_timestamp(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();

    if let Ok(value) = trimmed.parse::<i64>() {
        return epoch_to_millis(value);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp_millis());
    }

    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(dt.timestamp_millis());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }

    Err(Error::invalid_timestamp(
        input,
        "expected epoch seconds/milliseconds or an ISO 8601 date-time",
    ))
}
