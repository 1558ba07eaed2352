//! Configuration error types

use thiserror::Error;

/// Errors raised by configuration validation.
///
/// Playback operations never error; only setup-time validation is
/// fatal-by-design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimetricError {
    /// `from` and `to` vectors must pair element-wise
    #[error("from/to vector length mismatch: {from} vs {to}")]
    VectorMismatch { from: usize, to: usize },

    /// Rounding precision of zero digits would truncate every frame
    #[error("decimal precision must be at least 1 digit")]
    ZeroDecimal,

    /// Rounding precision beyond f64 significance would overflow the scale
    /// factor into infinity
    #[error("decimal precision must be at most 15 digits, got {0}")]
    ExcessiveDecimal(u32),

    /// Durations are wall-time spans and cannot run backwards
    #[error("duration must be a non-negative number of milliseconds, got {0}")]
    InvalidDuration(f64),

    /// Delays are wall-time spans and cannot run backwards
    #[error("delay must be a non-negative number of milliseconds, got {0}")]
    InvalidDelay(f64),
}

/// Result type for animetric operations
pub type Result<T> = std::result::Result<T, AnimetricError>;
