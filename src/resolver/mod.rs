//! # Resolver Module
//!
//! Resolves an arbitrary storefront path to the canonical entity behind it.
//!
//! ## Resolution Flow
//!
//! ```text
//! raw path ──► normalize ──► product target path? ──yes──► collapse to 4 segments
//!                                   │ no
//!                                   ▼
//!                           custom URL locator
//!                                   │
//!                                   ▼
//!                      RedirectChainWalker (request path)
//!                                   │ miss
//!                                   ▼
//!                         lookup by target path
//!                                   │
//!                                   ▼
//!                  classify ──► enrich + visibility ──► ResolvedEntity?
//! ```
//!
//! Unknown paths and hidden entities (disabled products, inactive categories,
//! out-of-stock products when the store hides them) both resolve to `None`, so
//! callers cannot probe for the existence of hidden entities.

mod core;
mod entity;
mod path;
mod policy;

pub use core::CanonicalResolver;
pub use entity::{EntityType, ResolvedEntity};
pub use path::{canonical_product_path, normalize_path};
