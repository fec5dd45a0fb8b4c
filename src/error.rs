//! Error types for sinkguard

use crate::context::SecurityContext;
use thiserror::Error;

/// Errors raised when a value cannot be cleared for a rendering context.
///
/// All variants are hard failures: the correct caller response is to not
/// render the value. There is no fail-open path and nothing here is
/// transient or retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    /// A trusted value was presented for a context it does not satisfy
    #[error("required a value trusted for {required}, got one trusted for {actual}")]
    WrongTrustType {
        /// The context the caller asked to render into
        required: SecurityContext,
        /// The context the value was actually trusted for
        actual: SecurityContext,
    },

    /// A plain string was presented for a context with no automatic sanitizer
    #[error("untrusted value in {0} context; no automatic sanitizer exists for it")]
    UntrustedInSensitiveContext(SecurityContext),

    /// A numeric context code outside the closed enumeration
    #[error("unknown security context code {0}")]
    UnknownContext(u8),
}

/// Result type alias for sanitization operations
pub type Result<T> = std::result::Result<T, SanitizeError>;
