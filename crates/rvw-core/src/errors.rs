//! Cross-cutting error types for reviewgen.
//!
//! Conversion and configuration failures have their own enums in
//! `rvw-convert` and `rvw-config`. The binary folds everything into
//! `anyhow::Error` at the process boundary.

use thiserror::Error;

/// Errors that can be raised by any reviewgen crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The export name is not usable as a JavaScript binding.
    #[error("Invalid export name '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },
}
