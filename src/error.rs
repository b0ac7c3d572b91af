//! Unified error types for shop-audit.
//!
//! Validation errors are raised before any analysis begins; probe failures
//! are caught at the sub-check boundary and replaced with degraded defaults,
//! so they only surface here when a caller talks to a probe directly.

use thiserror::Error;

/// Main error type for audit operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    /// Malformed input, e.g. an invalid store URL. Raised synchronously
    /// before any analysis begins.
    #[error("Invalid audit request: {0}")]
    Validation(String),

    /// A storefront probe call failed (network error, non-2xx, parse
    /// failure). The engine never propagates these; it substitutes the
    /// documented degraded default instead.
    #[error("Probe failed: {context}")]
    Probe {
        context: String,
        #[source]
        source: ProbeErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Unexpected internal errors; the engine transitions to `Failed` and
    /// re-raises these as-is.
    #[error("Audit failed: {0}")]
    Internal(String),
}

/// Specific probe error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProbeErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Storefront returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Probe unavailable: {0}")]
    Unavailable(String),
}

/// Convenient Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

impl AuditError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a probe error with context
    pub fn probe(context: impl Into<String>, source: ProbeErrorKind) -> Self {
        Self::Probe {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<url::ParseError> for AuditError {
    fn from(err: url::ParseError) -> Self {
        Self::Validation(format!("invalid store URL: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::validation("empty store URL");
        assert!(err.to_string().contains("empty store URL"));

        let err = AuditError::probe(
            "fetching trust signals",
            ProbeErrorKind::HttpStatus { status: 503 },
        );
        assert!(err.to_string().contains("trust signals"));
    }

    #[test]
    fn test_probe_error_source_chain() {
        let err = AuditError::probe(
            "performance sample",
            ProbeErrorKind::Timeout { seconds: 10 },
        );
        let source = std::error::Error::source(&err).expect("probe errors carry a source");
        assert!(source.to_string().contains("10s"));
    }

    #[test]
    fn test_url_parse_error_maps_to_validation() {
        let err: AuditError = url::ParseError::EmptyHost.into();
        assert!(matches!(err, AuditError::Validation(_)));
    }
}
