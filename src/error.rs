//! Error types for sitemap-gen
//!
//! This module defines all error types used throughout the library.
//! Every failure is returned as a value to the immediate caller; the
//! library never panics on invalid input, never logs, and never retries.

use thiserror::Error;

/// Result type alias using sitemap-gen Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sitemap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Location is not a syntactically valid absolute URI
    #[error("invalid location: {0:?} is not an absolute URI")]
    InvalidLocation(String),

    /// Change frequency is not one of the seven protocol tokens
    #[error("invalid change frequency: {0:?}")]
    InvalidFrequency(String),

    /// Priority is outside the closed range [0.0, 1.0]
    #[error("invalid priority: {0} is not within 0.0..=1.0")]
    InvalidPriority(f64),

    /// Generation was attempted on a sitemap with no URLs
    #[error("sitemap contains no URLs")]
    EmptySitemap,

    /// XML encoding error (data to XML conversion)
    #[error("encoding error: {0}")]
    Encode(String),

    /// Filesystem error while persisting a generated sitemap
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is a construction-time validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLocation(_) | Error::InvalidFrequency(_) | Error::InvalidPriority(_)
        )
    }
}
