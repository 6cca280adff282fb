//! Error types for WXR decoding
//!
//! Both variants are terminal: no partial export is returned, and retrying
//! with the same bytes gives the same failure.

use thiserror::Error;

use crate::diagnostics::{format_report, Diagnostic};

/// Fatal decoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not well-formed XML, or a DOCTYPE was declared
    #[error("There was an error when reading this WXR file:\n{}", format_report(.diagnostics))]
    MalformedDocument { diagnostics: Vec<Diagnostic> },

    /// `wp:wxr_version` is missing or not of the form `<int>.<int>`
    #[error("This does not appear to be a WXR file, missing/invalid WXR version number: {0}")]
    MissingOrInvalidVersion(String),
}

impl DecodeError {
    /// Diagnostics captured from the XML reader; empty for version failures
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            DecodeError::MalformedDocument { diagnostics } => diagnostics,
            DecodeError::MissingOrInvalidVersion(_) => &[],
        }
    }

    /// The same input always fails the same way
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;
