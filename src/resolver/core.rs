use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::entity::{EntityType, ResolvedEntity};
use super::path::{canonical_product_path, normalize_path};
use super::policy::EntityPolicy;
use crate::catalog::{
    CategoryRepository, CustomUrlLocator, InMemoryCatalog, ProductRepository, StockLookup,
    StoreConfig, StoreContext,
};
use crate::error::ResolveError;
use crate::rewrite::{
    RedirectChainWalker, RewriteFilter, RewriteStore, UrlRewriteRecord,
    DEFAULT_MAX_REDIRECT_HOPS,
};
use crate::runtime_config::RuntimeConfig;

/// Resolves storefront paths to canonical entities.
///
/// Holds only read-only collaborators, so one instance can serve concurrent
/// callers. No state survives between `resolve` calls.
pub struct CanonicalResolver {
    rewrites: Arc<dyn RewriteStore>,
    custom_urls: Option<Arc<dyn CustomUrlLocator>>,
    policy: EntityPolicy,
    max_redirect_hops: usize,
}

impl CanonicalResolver {
    /// Create a resolver over the given collaborators.
    pub fn new(
        rewrites: Arc<dyn RewriteStore>,
        products: Arc<dyn ProductRepository>,
        stock: Arc<dyn StockLookup>,
        categories: Arc<dyn CategoryRepository>,
        config: Arc<dyn StoreConfig>,
    ) -> Self {
        Self {
            rewrites,
            custom_urls: None,
            policy: EntityPolicy {
                products,
                stock,
                categories,
                config,
            },
            max_redirect_hops: DEFAULT_MAX_REDIRECT_HOPS,
        }
    }

    /// Resolver whose every collaborator is the in-memory catalog.
    #[must_use]
    pub fn from_catalog(catalog: Arc<InMemoryCatalog>) -> Self {
        Self::new(
            Arc::<InMemoryCatalog>::clone(&catalog),
            Arc::<InMemoryCatalog>::clone(&catalog),
            Arc::<InMemoryCatalog>::clone(&catalog),
            Arc::<InMemoryCatalog>::clone(&catalog),
            Arc::<InMemoryCatalog>::clone(&catalog),
        )
        .with_custom_url_locator(catalog)
    }

    /// Consult `locator` for aliases before rewrite lookups.
    #[must_use]
    pub fn with_custom_url_locator(mut self, locator: Arc<dyn CustomUrlLocator>) -> Self {
        self.custom_urls = Some(locator);
        self
    }

    /// Override the redirect hop ceiling. Zero is ignored.
    #[must_use]
    pub fn with_max_redirect_hops(mut self, hops: usize) -> Self {
        if hops > 0 {
            self.max_redirect_hops = hops;
        }
        self
    }

    /// Apply the tunables from `config`.
    #[must_use]
    pub fn with_runtime_config(self, config: &RuntimeConfig) -> Self {
        self.with_max_redirect_hops(config.max_redirect_hops)
    }

    #[must_use]
    pub fn max_redirect_hops(&self) -> usize {
        self.max_redirect_hops
    }

    /// Resolve `raw_path` to the canonical entity visible in `store`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidArgument`] for an empty or blank path
    /// - [`ResolveError::RedirectCycleDetected`] for a non-terminating redirect chain
    /// - [`ResolveError::Backend`] when a collaborator fails
    pub fn resolve(
        &self,
        raw_path: &str,
        store: &StoreContext,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        if raw_path.trim().is_empty() {
            return Err(ResolveError::InvalidArgument);
        }

        let path = self.locate(normalize_path(raw_path));
        debug!(
            raw_path = %raw_path,
            path = %path,
            store_id = store.store_id,
            "Resolving storefront path"
        );

        let Some(record) = self.find_canonical(&path, store)? else {
            debug!(path = %path, store_id = store.store_id, "No rewrite matches path");
            return Ok(None);
        };

        let entity_type = EntityType::from_tag(&record.entity_type);
        let Some(enrichment) = self.policy.apply(&entity_type, record.entity_id, store)? else {
            return Ok(None);
        };

        let entity = ResolvedEntity::new(record, entity_type, enrichment);
        info!(
            path = %path,
            store_id = store.store_id,
            entity_id = entity.id,
            entity_type = %entity.entity_type,
            canonical_url = %entity.canonical_url,
            "Storefront path resolved"
        );
        Ok(Some(entity))
    }

    /// GraphQL-facing variant of [`resolve`](Self::resolve): the `EntityUrl`
    /// payload, or `Value::Null` when nothing visible matches.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_entity_url(
        &self,
        url: &str,
        store: &StoreContext,
    ) -> Result<Value, ResolveError> {
        match self.resolve(url, store)? {
            Some(entity) => Ok(serde_json::to_value(entity).map_err(anyhow::Error::from)?),
            None => Ok(Value::Null),
        }
    }

    /// Product deep links win over custom URLs: the breadcrumb segments after
    /// the product id must not alter resolution.
    fn locate(&self, path: &str) -> String {
        if let Some(product_path) = canonical_product_path(path) {
            return product_path;
        }
        self.custom_urls
            .as_ref()
            .and_then(|locator| locator.locate(path))
            .filter(|located| !located.is_empty())
            .unwrap_or_else(|| path.to_owned())
    }

    fn find_canonical(
        &self,
        path: &str,
        store: &StoreContext,
    ) -> Result<Option<UrlRewriteRecord>, ResolveError> {
        let walker = RedirectChainWalker::new(self.rewrites.as_ref(), self.max_redirect_hops);
        if let Some(record) = walker.walk(path, store.store_id)? {
            return Ok(Some(record));
        }

        // the caller may already hold a canonical target path
        let filter = RewriteFilter::TargetPath {
            path,
            store_id: store.store_id,
        };
        Ok(self.rewrites.find_one(&filter)?)
    }
}
