//! Trust-tag wrappers for values asserted safe in a specific context
//!
//! Each wrapper owns one raw string that calling code has verified out of
//! band. The payload is opaque: construction goes through the [`bypass`]
//! factory, the only unwrap path is the dispatcher, and stringification
//! renders a diagnostic rather than the payload alone, so a wrapper that is
//! naively interpolated into output is conspicuous instead of silently
//! leaking its content as plain text.
//!
//! [`bypass`]: crate::bypass

use crate::context::SecurityContext;
use std::fmt;

/// Markup trusted for `HTML` contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

/// A style declaration trusted for `STYLE` contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeStyle(String);

/// Script source trusted for `SCRIPT` contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeScript(String);

/// A link target trusted for `URL` contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUrl(String);

/// A loadable-resource link trusted for `RESOURCE_URL` contexts.
///
/// Also satisfies `URL` contexts: anything safe to load is safe to
/// navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeResourceUrl(String);

impl SafeHtml {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The context this value is trusted for
    pub fn tag(&self) -> SecurityContext {
        SecurityContext::Html
    }
}

impl SafeStyle {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The context this value is trusted for
    pub fn tag(&self) -> SecurityContext {
        SecurityContext::Style
    }
}

impl SafeScript {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The context this value is trusted for
    pub fn tag(&self) -> SecurityContext {
        SecurityContext::Script
    }
}

impl SafeUrl {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The context this value is trusted for
    pub fn tag(&self) -> SecurityContext {
        SecurityContext::Url
    }
}

impl SafeResourceUrl {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The context this value is trusted for
    pub fn tag(&self) -> SecurityContext {
        SecurityContext::ResourceUrl
    }
}

/// A value trusted for exactly one rendering context.
///
/// The sum type lets the dispatcher match exhaustively: adding a context
/// forces every call site that consumes trusted values to be revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustedValue {
    Html(SafeHtml),
    Style(SafeStyle),
    Script(SafeScript),
    Url(SafeUrl),
    ResourceUrl(SafeResourceUrl),
}

impl TrustedValue {
    /// The context this value was trusted for, fixed at construction
    pub fn tag(&self) -> SecurityContext {
        match self {
            TrustedValue::Html(_) => SecurityContext::Html,
            TrustedValue::Style(_) => SecurityContext::Style,
            TrustedValue::Script(_) => SecurityContext::Script,
            TrustedValue::Url(_) => SecurityContext::Url,
            TrustedValue::ResourceUrl(_) => SecurityContext::ResourceUrl,
        }
    }

    /// Whether this value may be used where `required` is expected
    pub fn satisfies(&self, required: SecurityContext) -> bool {
        self.tag().satisfies(required)
    }

    /// Extract the raw payload. Dispatcher-only: callers go through
    /// [`SinkGuard::sanitize`](crate::guard::SinkGuard::sanitize).
    pub(crate) fn into_payload(self) -> String {
        match self {
            TrustedValue::Html(v) => v.0,
            TrustedValue::Style(v) => v.0,
            TrustedValue::Script(v) => v.0,
            TrustedValue::Url(v) => v.0,
            TrustedValue::ResourceUrl(v) => v.0,
        }
    }

    fn payload_ref(&self) -> &str {
        match self {
            TrustedValue::Html(v) => &v.0,
            TrustedValue::Style(v) => &v.0,
            TrustedValue::Script(v) => &v.0,
            TrustedValue::Url(v) => &v.0,
            TrustedValue::ResourceUrl(v) => &v.0,
        }
    }
}

impl fmt::Display for TrustedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrustedValue[{}]{{ {} }} (must be cleared through sanitize(), not interpolated)",
            self.tag(),
            self.payload_ref()
        )
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrustedValue::Html(self.clone()))
    }
}

impl fmt::Display for SafeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrustedValue::Style(self.clone()))
    }
}

impl fmt::Display for SafeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrustedValue::Script(self.clone()))
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrustedValue::Url(self.clone()))
    }
}

impl fmt::Display for SafeResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrustedValue::ResourceUrl(self.clone()))
    }
}

impl From<SafeHtml> for TrustedValue {
    fn from(v: SafeHtml) -> Self {
        TrustedValue::Html(v)
    }
}

impl From<SafeStyle> for TrustedValue {
    fn from(v: SafeStyle) -> Self {
        TrustedValue::Style(v)
    }
}

impl From<SafeScript> for TrustedValue {
    fn from(v: SafeScript) -> Self {
        TrustedValue::Script(v)
    }
}

impl From<SafeUrl> for TrustedValue {
    fn from(v: SafeUrl) -> Self {
        TrustedValue::Url(v)
    }
}

impl From<SafeResourceUrl> for TrustedValue {
    fn from(v: SafeResourceUrl) -> Self {
        TrustedValue::ResourceUrl(v)
    }
}
