//! Trust-bypass factory
//!
//! The only way to mint a trusted value. Each constructor wraps a raw
//! string unconditionally: no validation, no sanitization, no failure
//! path. Every call is an assertion by the caller that the payload is safe
//! for the named context, so call sites should be rare, reviewed, and easy
//! to grep for.

use crate::context::SecurityContext;
use crate::trusted::{SafeHtml, SafeResourceUrl, SafeScript, SafeStyle, SafeUrl};
use tracing::debug;

/// Wrap a raw string as markup trusted for `HTML` contexts.
///
/// WARNING: calling this with attacker-controlled data opens the
/// application to cross-site scripting. The caller takes full
/// responsibility for the payload.
pub fn trust_html(raw: impl Into<String>) -> SafeHtml {
    debug!(context = %SecurityContext::Html, "minting trusted value, sanitization bypassed");
    SafeHtml::new(raw.into())
}

/// Wrap a raw string as a style declaration trusted for `STYLE` contexts.
///
/// WARNING: calling this with attacker-controlled data opens the
/// application to cross-site scripting. The caller takes full
/// responsibility for the payload.
pub fn trust_style(raw: impl Into<String>) -> SafeStyle {
    debug!(context = %SecurityContext::Style, "minting trusted value, sanitization bypassed");
    SafeStyle::new(raw.into())
}

/// Wrap a raw string as script source trusted for `SCRIPT` contexts.
///
/// WARNING: calling this with attacker-controlled data opens the
/// application to cross-site scripting. `SCRIPT` has no automatic
/// sanitizer, so this is the only way any value reaches a script sink.
pub fn trust_script(raw: impl Into<String>) -> SafeScript {
    debug!(context = %SecurityContext::Script, "minting trusted value, sanitization bypassed");
    SafeScript::new(raw.into())
}

/// Wrap a raw string as a link target trusted for `URL` contexts.
///
/// WARNING: calling this with attacker-controlled data opens the
/// application to code-executing URL schemes. The caller takes full
/// responsibility for the payload.
pub fn trust_url(raw: impl Into<String>) -> SafeUrl {
    debug!(context = %SecurityContext::Url, "minting trusted value, sanitization bypassed");
    SafeUrl::new(raw.into())
}

/// Wrap a raw string as a loadable-resource link trusted for
/// `RESOURCE_URL` contexts (and, by the trust order, `URL` contexts too).
///
/// WARNING: calling this with attacker-controlled data lets the
/// application load and execute arbitrary remote code. `RESOURCE_URL` has
/// no automatic sanitizer, so this is the only way any value reaches a
/// resource-loading sink.
pub fn trust_resource_url(raw: impl Into<String>) -> SafeResourceUrl {
    debug!(context = %SecurityContext::ResourceUrl, "minting trusted value, sanitization bypassed");
    SafeResourceUrl::new(raw.into())
}
