//! # Rewrite Module
//!
//! URL rewrite records and the redirect chain walker.
//!
//! A rewrite record maps a storefront request path (e.g. `blue-shirt.html`) to
//! a target path (e.g. `catalog/product/view/id/42`) and the entity behind it.
//! Records with a non-zero redirect type point at another request path that must
//! be looked up in turn; the [`RedirectChainWalker`] follows those hops until it
//! reaches a terminal record.
//!
//! ## Termination
//!
//! Rewrite data is operator-maintained and may contain loops (`a -> b -> a`).
//! The walker tracks every request path it has visited and enforces a hop
//! ceiling, so a malformed data set produces
//! [`ResolveError::RedirectCycleDetected`](crate::error::ResolveError::RedirectCycleDetected)
//! instead of hanging the request.

mod audit;
mod core;
mod walker;

pub use audit::{audit_redirects, ChainIssue};
pub use core::{RewriteFilter, RewriteStore, StoreId, UrlRewriteRecord};
pub use walker::{RedirectChainWalker, DEFAULT_MAX_REDIRECT_HOPS};
