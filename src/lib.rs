//! # sinkguard
//!
//! Trust-boundary sanitization coordinator for rendering sinks.
//!
//! ## Overview
//!
//! `sinkguard` sits between untrusted data and the surface it will be
//! rendered into (markup, stylesheet, script, navigable link, loadable
//! resource link). Given a value and its target context, the dispatcher
//! either unwraps a value the caller explicitly trusted for that context,
//! routes an untrusted string through the matching sanitization engine, or
//! rejects it. The per-context engines are swappable collaborators; this
//! crate owns the trust model, not the scrubbing algorithms.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sinkguard::{bypass, SecurityContext, SinkGuard};
//! # use sinkguard::{MarkupSanitizer, StyleSanitizer, UrlSanitizer};
//! # struct Strip;
//! # impl MarkupSanitizer<()> for Strip {
//! #     fn sanitize_markup(&self, _doc: &(), raw: &str) -> String {
//! #         raw.replace("<script>", "").replace("</script>", "")
//! #     }
//! # }
//! # impl StyleSanitizer for Strip {
//! #     fn sanitize_style(&self, raw: &str) -> String { raw.to_string() }
//! # }
//! # impl UrlSanitizer for Strip {
//! #     fn sanitize_url(&self, raw: &str) -> String { raw.to_string() }
//! # }
//! # fn main() -> sinkguard::Result<()> {
//! let guard = SinkGuard::new((), Arc::new(Strip), Arc::new(Strip), Arc::new(Strip));
//!
//! // Untrusted markup is routed through the markup engine
//! let clean = guard.sanitize(SecurityContext::Html, Some("a<script>b</script>".into()))?;
//! assert_eq!(clean.as_deref(), Some("ab"));
//!
//! // A bypassed value skips sanitization, for its own context only
//! let trusted = bypass::trust_html("<b>bold</b>");
//! let clean = guard.sanitize(SecurityContext::Html, Some(trusted.into()))?;
//! assert_eq!(clean.as_deref(), Some("<b>bold</b>"));
//!
//! // Untrusted input in a context with no engine is a hard failure
//! assert!(guard
//!     .sanitize(SecurityContext::Script, Some("alert(1)".into()))
//!     .is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **SecurityContext** — the six rendering contexts and their trust
//!   order (`RESOURCE_URL` satisfies `URL`; nothing else crosses contexts)
//! - **TrustedValue** — per-context trust-tag wrappers, minted only
//!   through the `bypass` factory
//! - **SinkGuard** — the dispatcher: unwrap, sanitize, or reject
//! - **engines** — the contracts the swappable sanitization engines
//!   implement; `SCRIPT` and `RESOURCE_URL` have none by design

pub mod bypass;
pub mod context;
pub mod engines;
pub mod error;
pub mod guard;
pub mod trusted;

// Re-export core types
pub use context::SecurityContext;
pub use engines::{MarkupSanitizer, StyleSanitizer, UrlSanitizer};
pub use error::{Result, SanitizeError};
pub use guard::{SinkGuard, SinkValue};
pub use trusted::{SafeHtml, SafeResourceUrl, SafeScript, SafeStyle, SafeUrl, TrustedValue};
