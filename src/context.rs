//! Rendering contexts and the trust partial order
//!
//! A context names the syntactic position a value is inserted into. The
//! numeric discriminants are a stable compatibility surface: compiled
//! templates and cross-process callers refer to contexts by code, so the
//! values must never change.

use crate::error::{Result, SanitizeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rendering context a value is inserted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SecurityContext {
    /// No rendering risk; values pass through unchanged
    None = 0,
    /// Markup body
    Html = 1,
    /// Style declaration
    Style = 2,
    /// Executable script body
    Script = 3,
    /// Navigable link target
    Url = 4,
    /// Loadable-resource link (script source, frame source, ...)
    ResourceUrl = 5,
}

impl SecurityContext {
    /// All contexts, in stable code order
    pub const ALL: [SecurityContext; 6] = [
        SecurityContext::None,
        SecurityContext::Html,
        SecurityContext::Style,
        SecurityContext::Script,
        SecurityContext::Url,
        SecurityContext::ResourceUrl,
    ];

    /// Stable numeric code for this context
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a context by its stable numeric code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(SecurityContext::None),
            1 => Ok(SecurityContext::Html),
            2 => Ok(SecurityContext::Style),
            3 => Ok(SecurityContext::Script),
            4 => Ok(SecurityContext::Url),
            5 => Ok(SecurityContext::ResourceUrl),
            other => Err(SanitizeError::UnknownContext(other)),
        }
    }

    /// Whether a value trusted for `self` may be used where `required` is
    /// expected.
    ///
    /// The only cross-context acceptance is `ResourceUrl` satisfying `Url`:
    /// a value safe to load as a resource is also safe to navigate to. The
    /// converse does not hold, and no other pair is accepted.
    pub fn satisfies(self, required: SecurityContext) -> bool {
        self == required
            || (self == SecurityContext::ResourceUrl && required == SecurityContext::Url)
    }
}

impl fmt::Display for SecurityContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SecurityContext::None => "NONE",
            SecurityContext::Html => "HTML",
            SecurityContext::Style => "STYLE",
            SecurityContext::Script => "SCRIPT",
            SecurityContext::Url => "URL",
            SecurityContext::ResourceUrl => "RESOURCE_URL",
        };
        write!(f, "{}", name)
    }
}
