//! # Runtime Configuration Module
//!
//! Tunables for the resolver, loaded from environment variables or from the
//! `runtime:` section of a YAML catalog file.
//!
//! ## Environment Variables
//!
//! ### `STOREFRONT_MAX_REDIRECT_HOPS`
//!
//! Maximum number of redirect hops the resolver follows before reporting a
//! redirect cycle. Accepts decimal (`128`) or hexadecimal (`0x80`) values.
//! Zero and unparsable values fall back to the default of 128.
//!
//! ## Usage
//!
//! ```rust
//! use storefront_router::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.max_redirect_hops > 0);
//! ```
//!
//! The routing cycle ceiling of the front controller is not configurable; see
//! [`MAX_ROUTING_CYCLES`](crate::dispatcher::MAX_ROUTING_CYCLES).

use serde::{Deserialize, Deserializer};
use std::env;

use crate::rewrite::DEFAULT_MAX_REDIRECT_HOPS;

/// Runtime configuration for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Redirect hop ceiling (default: 128, zero falls back to the default)
    #[serde(deserialize_with = "hops_or_default")]
    pub max_redirect_hops: usize,
}

fn hops_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let hops = usize::deserialize(deserializer)?;
    Ok(if hops == 0 {
        DEFAULT_MAX_REDIRECT_HOPS
    } else {
        hops
    })
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_redirect_hops: DEFAULT_MAX_REDIRECT_HOPS,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let max_redirect_hops = env::var("STOREFRONT_MAX_REDIRECT_HOPS")
            .ok()
            .and_then(|val| parse_count(&val))
            .unwrap_or(DEFAULT_MAX_REDIRECT_HOPS);
        RuntimeConfig { max_redirect_hops }
    }

    /// Override fields that are set in the environment.
    #[must_use]
    pub fn merge_env(mut self) -> Self {
        if let Some(hops) = env::var("STOREFRONT_MAX_REDIRECT_HOPS")
            .ok()
            .and_then(|val| parse_count(&val))
        {
            self.max_redirect_hops = hops;
        }
        self
    }
}

/// Parse a positive decimal or `0x`-prefixed hexadecimal count.
fn parse_count(val: &str) -> Option<usize> {
    let val = val.trim();
    let parsed = if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    };
    parsed.filter(|n| *n > 0)
}
