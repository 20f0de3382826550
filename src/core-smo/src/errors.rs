//! Error types for the sitemap outline library.

use thiserror::Error;

/// Main error type for sitemap outline operations.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Sitemap XML could not be parsed
    #[error("Sitemap parsing failed: {0}")]
    SitemapError(String),

    /// Glob pattern error
    #[error("Glob pattern error: {0}")]
    GlobError(#[from] globset::Error),
}

/// Type alias for Result with OutlineError
pub type Result<T> = std::result::Result<T, OutlineError>;
