//! Error types for Cryoprison operations.
//!
//! This module defines [`CryoprisonError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CryoprisonError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CryoprisonError::Other`) for unexpected errors
//! - Inspector failures propagate to the caller untouched

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Cryoprison operations.
#[derive(Debug, Error)]
pub enum CryoprisonError {
    /// A check identifier or value was rejected by an inspector.
    #[error("Invalid check '{check_id}': {message}")]
    InvalidCheck { check_id: String, message: String },

    /// An inspector could not be initialized from its check.
    #[error("Inspector for '{check_id}' failed to initialize: {message}")]
    InspectorInit { check_id: String, message: String },

    /// Catalog file not found at expected location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cryoprison operations.
pub type Result<T> = std::result::Result<T, CryoprisonError>;
