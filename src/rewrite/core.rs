use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier of a store view (tenant scope for rewrite records).
pub type StoreId = u32;

/// A stored mapping from a request path to a target path and entity.
///
/// Retrieved from a [`RewriteStore`] and never mutated by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRewriteRecord {
    /// Storefront path as requested by the client, without leading slash
    pub request_path: String,
    /// Internal target path, or the next request path when redirecting
    pub target_path: String,
    /// Raw entity tag (`product`, `category`, `cms-page`, ...)
    pub entity_type: String,
    /// Identifier of the entity in its repository
    pub entity_id: u64,
    /// 0 = terminal; any other value is an HTTP redirect code (301, 302)
    #[serde(default)]
    pub redirect_type: u16,
    /// Store view this record belongs to
    #[serde(default)]
    pub store_id: StoreId,
}

impl UrlRewriteRecord {
    /// Whether this record points at another request path.
    #[inline]
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        self.redirect_type > 0
    }
}

/// Lookup key for a single rewrite record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteFilter<'a> {
    /// Match on `request_path`
    RequestPath {
        /// Path to match
        path: &'a str,
        /// Store scope
        store_id: StoreId,
    },
    /// Match on `target_path`
    TargetPath {
        /// Path to match
        path: &'a str,
        /// Store scope
        store_id: StoreId,
    },
}

impl<'a> RewriteFilter<'a> {
    /// The path being matched.
    #[must_use]
    pub fn path(&self) -> &'a str {
        match self {
            RewriteFilter::RequestPath { path, .. } | RewriteFilter::TargetPath { path, .. } => {
                path
            }
        }
    }

    /// The store scope of the lookup.
    #[must_use]
    pub fn store_id(&self) -> StoreId {
        match self {
            RewriteFilter::RequestPath { store_id, .. }
            | RewriteFilter::TargetPath { store_id, .. } => *store_id,
        }
    }

    /// Whether `record` satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &UrlRewriteRecord) -> bool {
        if record.store_id != self.store_id() {
            return false;
        }
        match self {
            RewriteFilter::RequestPath { path, .. } => record.request_path == *path,
            RewriteFilter::TargetPath { path, .. } => record.target_path == *path,
        }
    }
}

/// Read-only access to persisted rewrite records.
///
/// Implementations may cache or parallelize internally; the walker issues one
/// lookup per hop and never holds results across calls.
pub trait RewriteStore: Send + Sync {
    /// Return the first record matching `filter`, if any.
    fn find_one(&self, filter: &RewriteFilter<'_>) -> anyhow::Result<Option<UrlRewriteRecord>>;
}

impl<T: RewriteStore + ?Sized> RewriteStore for Arc<T> {
    fn find_one(&self, filter: &RewriteFilter<'_>) -> anyhow::Result<Option<UrlRewriteRecord>> {
        (**self).find_one(filter)
    }
}
