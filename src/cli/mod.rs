//! # CLI Module
//!
//! Command-line access to the resolver for operators and debugging.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! Resolve one storefront URL against a YAML catalog and print the
//! `EntityUrl` payload (`null` when nothing visible matches):
//!
//! ```bash
//! storefront-router resolve --catalog demos/catalog.yaml --store-id 1 /blue-shirt.html
//! ```
//!
//! ### `audit`
//!
//! Walk every redirect record and report cycles and dead ends:
//!
//! ```bash
//! storefront-router audit --catalog demos/catalog.yaml --fail-on-issue
//! ```
//!
//! The catalog file may carry a `runtime:` section with
//! [`RuntimeConfig`](crate::runtime_config::RuntimeConfig) fields;
//! `STOREFRONT_MAX_REDIRECT_HOPS` overrides it.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
