//! Error types for linkharvest.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed before any traversal began.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// The document has no `body` element to walk.
    #[error("Document has no body element")]
    MissingBody,

    /// The DOM walk failed partway through. No partial records survive.
    #[error("Traversal failed: {0}")]
    TraversalError(String),

    /// An href could not be resolved against a known document base.
    #[error("URL resolution failed for {href}: {reason}")]
    UrlResolveError {
        /// The raw href attribute that failed to resolve.
        href: String,
        /// Parser message from the URL library.
        reason: String,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
