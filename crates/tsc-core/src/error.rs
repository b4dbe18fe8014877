//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `tsc-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid signal timing: min_green {min_green} must be >= 1 and < max_green {max_green}")]
    InvalidTiming { min_green: u64, max_green: u64 },
}

/// Shorthand result type for `tsc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
