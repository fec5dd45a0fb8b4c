//! Sanitizing dispatcher
//!
//! The single entry point that clears a value for a rendering context. A
//! trusted value is unwrapped only when its tag satisfies the requested
//! context; an untrusted string is routed through the matching engine, or
//! rejected outright for the contexts that have none.

use crate::context::SecurityContext;
use crate::engines::{MarkupSanitizer, StyleSanitizer, UrlSanitizer};
use crate::error::{Result, SanitizeError};
use crate::trusted::{SafeHtml, SafeResourceUrl, SafeScript, SafeStyle, SafeUrl, TrustedValue};
use std::sync::Arc;
use tracing::warn;

/// A value presented for rendering: a plain untrusted string, or a wrapper
/// minted through the [`bypass`](crate::bypass) factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkValue {
    /// Untrusted content; must pass through the matching engine
    Raw(String),
    /// Content the caller asserted safe for one specific context
    Trusted(TrustedValue),
}

impl From<&str> for SinkValue {
    fn from(s: &str) -> Self {
        SinkValue::Raw(s.to_string())
    }
}

impl From<String> for SinkValue {
    fn from(s: String) -> Self {
        SinkValue::Raw(s)
    }
}

impl From<TrustedValue> for SinkValue {
    fn from(v: TrustedValue) -> Self {
        SinkValue::Trusted(v)
    }
}

impl From<SafeHtml> for SinkValue {
    fn from(v: SafeHtml) -> Self {
        SinkValue::Trusted(v.into())
    }
}

impl From<SafeStyle> for SinkValue {
    fn from(v: SafeStyle) -> Self {
        SinkValue::Trusted(v.into())
    }
}

impl From<SafeScript> for SinkValue {
    fn from(v: SafeScript) -> Self {
        SinkValue::Trusted(v.into())
    }
}

impl From<SafeUrl> for SinkValue {
    fn from(v: SafeUrl) -> Self {
        SinkValue::Trusted(v.into())
    }
}

impl From<SafeResourceUrl> for SinkValue {
    fn from(v: SafeResourceUrl) -> Self {
        SinkValue::Trusted(v.into())
    }
}

/// Trust-boundary dispatcher for rendering sinks.
///
/// Holds the three engine collaborators plus the opaque document handle
/// the markup engine needs. The guard itself is stateless between calls:
/// it neither mutates nor caches, so one instance may be shared across
/// threads without coordination.
pub struct SinkGuard<D> {
    doc: D,
    markup: Arc<dyn MarkupSanitizer<D>>,
    style: Arc<dyn StyleSanitizer>,
    url: Arc<dyn UrlSanitizer>,
}

impl<D> SinkGuard<D> {
    /// Create a guard from the injected document handle and the three
    /// engine collaborators
    pub fn new(
        doc: D,
        markup: Arc<dyn MarkupSanitizer<D>>,
        style: Arc<dyn StyleSanitizer>,
        url: Arc<dyn UrlSanitizer>,
    ) -> Self {
        Self {
            doc,
            markup,
            style,
            url,
        }
    }

    /// Clear `value` for insertion into `ctx`.
    ///
    /// Returns `Ok(None)` when there is nothing to render (`None` input or
    /// an empty raw string), `Ok(Some(_))` with a string safe for the
    /// context, or an error the caller must treat as "do not render".
    ///
    /// Trusted values are unwrapped only when their tag satisfies the
    /// context; a mismatch is never downgraded to sanitization. Untrusted
    /// strings go through the matching engine, except in `SCRIPT` and
    /// `RESOURCE_URL` where no engine exists and rejection is the only
    /// safe outcome.
    pub fn sanitize(
        &self,
        ctx: SecurityContext,
        value: Option<SinkValue>,
    ) -> Result<Option<String>> {
        // Nothing to render: short-circuits before any context check.
        let value = match value {
            None => return Ok(None),
            Some(SinkValue::Raw(s)) if s.is_empty() => return Ok(None),
            Some(v) => v,
        };

        match ctx {
            // No rendering risk. Never unwraps: a trusted value passes
            // through in its diagnostic string form.
            SecurityContext::None => Ok(Some(match value {
                SinkValue::Raw(s) => s,
                SinkValue::Trusted(v) => v.to_string(),
            })),

            SecurityContext::Html => match value {
                SinkValue::Trusted(v) => self.unwrap_trusted(ctx, v).map(Some),
                SinkValue::Raw(s) => Ok(Some(self.markup.sanitize_markup(&self.doc, &s))),
            },

            SecurityContext::Style => match value {
                SinkValue::Trusted(v) => self.unwrap_trusted(ctx, v).map(Some),
                SinkValue::Raw(s) => Ok(Some(self.style.sanitize_style(&s))),
            },

            SecurityContext::Script => match value {
                SinkValue::Trusted(v) => self.unwrap_trusted(ctx, v).map(Some),
                SinkValue::Raw(_) => Err(self.reject_untrusted(ctx)),
            },

            // SafeUrl and SafeResourceUrl both satisfy URL.
            SecurityContext::Url => match value {
                SinkValue::Trusted(v) => self.unwrap_trusted(ctx, v).map(Some),
                SinkValue::Raw(s) => Ok(Some(self.url.sanitize_url(&s))),
            },

            SecurityContext::ResourceUrl => match value {
                SinkValue::Trusted(v) => self.unwrap_trusted(ctx, v).map(Some),
                SinkValue::Raw(_) => Err(self.reject_untrusted(ctx)),
            },
        }
    }

    /// [`sanitize`](Self::sanitize) for callers that carry contexts as
    /// stable numeric codes; fails with `UnknownContext` for codes outside
    /// the enumeration.
    pub fn sanitize_by_code(&self, code: u8, value: Option<SinkValue>) -> Result<Option<String>> {
        let ctx = SecurityContext::from_code(code)?;
        self.sanitize(ctx, value)
    }

    fn unwrap_trusted(&self, required: SecurityContext, value: TrustedValue) -> Result<String> {
        if value.satisfies(required) {
            Ok(value.into_payload())
        } else {
            let actual = value.tag();
            warn!(%required, %actual, "trusted value presented for a context it does not satisfy");
            Err(SanitizeError::WrongTrustType { required, actual })
        }
    }

    fn reject_untrusted(&self, ctx: SecurityContext) -> SanitizeError {
        warn!(context = %ctx, "untrusted value in a context with no automatic sanitizer");
        SanitizeError::UntrustedInSensitiveContext(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bypass;

    /// Stand-in document handle; the markup stub records that it was
    /// actually handed through.
    struct StubDoc {
        name: &'static str,
    }

    struct StubMarkup;

    impl MarkupSanitizer<StubDoc> for StubMarkup {
        fn sanitize_markup(&self, doc: &StubDoc, raw: &str) -> String {
            assert_eq!(doc.name, "test-doc");
            raw.replace("<script>", "").replace("</script>", "")
        }
    }

    struct StubStyle;

    impl StyleSanitizer for StubStyle {
        fn sanitize_style(&self, raw: &str) -> String {
            if raw.contains("url(") {
                String::new()
            } else {
                raw.to_string()
            }
        }
    }

    struct StubUrl;

    impl UrlSanitizer for StubUrl {
        fn sanitize_url(&self, raw: &str) -> String {
            if raw.starts_with("javascript:") {
                format!("unsafe:{}", raw)
            } else {
                raw.to_string()
            }
        }
    }

    fn test_guard() -> SinkGuard<StubDoc> {
        SinkGuard::new(
            StubDoc { name: "test-doc" },
            Arc::new(StubMarkup),
            Arc::new(StubStyle),
            Arc::new(StubUrl),
        )
    }

    #[test]
    fn test_none_context_passes_raw_through_unchanged() {
        let guard = test_guard();
        let out = guard
            .sanitize(SecurityContext::None, Some("<script>x</script>".into()))
            .unwrap();
        assert_eq!(out.as_deref(), Some("<script>x</script>"));
    }

    #[test]
    fn test_none_context_never_unwraps_trusted_values() {
        let guard = test_guard();
        let trusted = bypass::trust_html("<b>x</b>");
        let out = guard
            .sanitize(SecurityContext::None, Some(trusted.clone().into()))
            .unwrap()
            .unwrap();
        // The diagnostic form, not the raw payload.
        assert_eq!(out, trusted.to_string());
        assert_ne!(out, "<b>x</b>");
    }

    #[test]
    fn test_html_routes_raw_through_markup_engine() {
        let guard = test_guard();
        let out = guard
            .sanitize(SecurityContext::Html, Some("a<script>evil()</script>b".into()))
            .unwrap();
        assert_eq!(out.as_deref(), Some("aevil()b"));
    }

    #[test]
    fn test_html_trusted_skips_engine() {
        let guard = test_guard();
        let out = guard
            .sanitize(
                SecurityContext::Html,
                Some(bypass::trust_html("<b>x</b>").into()),
            )
            .unwrap();
        assert_eq!(out.as_deref(), Some("<b>x</b>"));
    }

    #[test]
    fn test_style_routes_raw_through_style_engine() {
        let guard = test_guard();
        let out = guard
            .sanitize(
                SecurityContext::Style,
                Some("background: url(http://evil)".into()),
            )
            .unwrap();
        assert_eq!(out.as_deref(), Some(""));
    }

    #[test]
    fn test_script_rejects_raw() {
        let guard = test_guard();
        let err = guard
            .sanitize(SecurityContext::Script, Some("alert(1)".into()))
            .unwrap_err();
        assert_eq!(
            err,
            SanitizeError::UntrustedInSensitiveContext(SecurityContext::Script)
        );
    }

    #[test]
    fn test_script_accepts_script_trusted_only() {
        let guard = test_guard();
        let out = guard
            .sanitize(
                SecurityContext::Script,
                Some(bypass::trust_script("doWork()").into()),
            )
            .unwrap();
        assert_eq!(out.as_deref(), Some("doWork()"));

        let err = guard
            .sanitize(
                SecurityContext::Script,
                Some(bypass::trust_html("x").into()),
            )
            .unwrap_err();
        assert_eq!(
            err,
            SanitizeError::WrongTrustType {
                required: SecurityContext::Script,
                actual: SecurityContext::Html,
            }
        );
    }

    #[test]
    fn test_url_routes_raw_through_url_engine() {
        let guard = test_guard();
        let out = guard
            .sanitize(SecurityContext::Url, Some("javascript:alert(1)".into()))
            .unwrap();
        assert_eq!(out.as_deref(), Some("unsafe:javascript:alert(1)"));
    }

    #[test]
    fn test_resource_url_trust_satisfies_url_context() {
        let guard = test_guard();
        let out = guard
            .sanitize(
                SecurityContext::Url,
                Some(bypass::trust_resource_url("http://x").into()),
            )
            .unwrap();
        assert_eq!(out.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_url_trust_does_not_satisfy_resource_url_context() {
        let guard = test_guard();
        let err = guard
            .sanitize(
                SecurityContext::ResourceUrl,
                Some(bypass::trust_url("http://x").into()),
            )
            .unwrap_err();
        assert_eq!(
            err,
            SanitizeError::WrongTrustType {
                required: SecurityContext::ResourceUrl,
                actual: SecurityContext::Url,
            }
        );
    }

    #[test]
    fn test_resource_url_rejects_raw() {
        let guard = test_guard();
        let err = guard
            .sanitize(SecurityContext::ResourceUrl, Some("http://x".into()))
            .unwrap_err();
        assert_eq!(
            err,
            SanitizeError::UntrustedInSensitiveContext(SecurityContext::ResourceUrl)
        );
    }

    #[test]
    fn test_none_input_short_circuits_in_every_context() {
        let guard = test_guard();
        for ctx in SecurityContext::ALL {
            assert_eq!(guard.sanitize(ctx, None).unwrap(), None);
        }
    }

    #[test]
    fn test_empty_raw_string_short_circuits_in_every_context() {
        let guard = test_guard();
        // Including the hard-fail contexts: the emptiness check comes first.
        for ctx in SecurityContext::ALL {
            assert_eq!(guard.sanitize(ctx, Some("".into())).unwrap(), None);
        }
    }

    #[test]
    fn test_sanitize_by_code_dispatches() {
        let guard = test_guard();
        let out = guard.sanitize_by_code(1, Some("<script>x</script>".into()));
        assert_eq!(out.unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_sanitize_by_code_rejects_unknown_context() {
        let guard = test_guard();
        let err = guard.sanitize_by_code(99, Some("x".into())).unwrap_err();
        assert_eq!(err, SanitizeError::UnknownContext(99));
    }

    #[test]
    fn test_engine_idempotence_via_stub() {
        let guard = test_guard();
        let once = guard
            .sanitize(SecurityContext::Html, Some("a<script>b</script>".into()))
            .unwrap()
            .unwrap();
        let twice = guard
            .sanitize(SecurityContext::Html, Some(once.clone().into()))
            .unwrap()
            .unwrap();
        assert_eq!(once, twice);

        let once = guard
            .sanitize(SecurityContext::Url, Some("javascript:alert(1)".into()))
            .unwrap()
            .unwrap();
        let twice = guard
            .sanitize(SecurityContext::Url, Some(once.clone().into()))
            .unwrap()
            .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_guard_is_shareable_across_threads() {
        let guard = Arc::new(test_guard());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let guard = Arc::clone(&guard);
                std::thread::spawn(move || {
                    let out = guard
                        .sanitize(SecurityContext::Html, Some("<script>x</script>y".into()))
                        .unwrap();
                    assert_eq!(out.as_deref(), Some("xy"));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
