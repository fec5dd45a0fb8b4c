//! Collaborator interfaces for the per-context sanitization engines
//!
//! The actual sanitization algorithms are swappable external collaborators;
//! this crate only defines the contract it requires of them. Every engine
//! is a total function over strings: it never fails, and in the worst case
//! returns an empty or maximally-stripped string (markup, style) or an
//! inert placeholder (url). Engines must be idempotent: sanitizing
//! already-sanitized output yields the same string.
//!
//! `SCRIPT` and `RESOURCE_URL` deliberately have no engine. There is no
//! safe way to "fix up" an untrusted script body or resource link, so the
//! dispatcher hard-fails on untrusted input for those contexts instead.

/// Strips markup of constructs capable of executing code or escaping the
/// intended subtree.
///
/// `D` is the environment-supplied parsing surface (a document handle or
/// equivalent). It is passed through explicitly on every call; this crate
/// neither creates nor inspects it.
pub trait MarkupSanitizer<D>: Send + Sync {
    fn sanitize_markup(&self, doc: &D, raw: &str) -> String;
}

/// Neutralizes style constructs capable of loading external resources or
/// evaluating expressions.
pub trait StyleSanitizer: Send + Sync {
    fn sanitize_style(&self, raw: &str) -> String;
}

/// Neutralizes disallowed URL schemes (code-executing schemes in
/// particular). May return an inert marker value when the whole input is
/// rejected.
pub trait UrlSanitizer: Send + Sync {
    fn sanitize_url(&self, raw: &str) -> String;
}
