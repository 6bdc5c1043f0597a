//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MmsError` as one
//! variant via `#[from]`, so parameter validation reads the same everywhere.

use thiserror::Error;

/// The top-level error type for `mms-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MmsError {
    /// A run parameter is out of range.  Raised once at entry, before any
    /// event processing begins.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },
}

impl MmsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MmsError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Shorthand result type for all `mms-*` crates.
pub type MmsResult<T> = Result<T, MmsError>;

/// Reject rates that are zero, negative, NaN or infinite.
pub(crate) fn check_rate(name: &'static str, rate: f64) -> MmsResult<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(MmsError::invalid(name, format!("must be positive and finite, got {rate}")))
    }
}
