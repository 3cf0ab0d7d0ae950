use std::collections::HashSet;

use tracing::{debug, warn};

use super::core::{RewriteFilter, RewriteStore, StoreId, UrlRewriteRecord};
use crate::error::ResolveError;

/// Default number of redirect hops followed before a chain is declared cyclic.
pub const DEFAULT_MAX_REDIRECT_HOPS: usize = 128;

/// Follows redirect records until a terminal record is reached.
pub struct RedirectChainWalker<'s, S: RewriteStore + ?Sized> {
    store: &'s S,
    max_hops: usize,
}

impl<'s, S: RewriteStore + ?Sized> RedirectChainWalker<'s, S> {
    /// Create a walker over `store` that gives up after `max_hops` redirects.
    pub fn new(store: &'s S, max_hops: usize) -> Self {
        Self { store, max_hops }
    }

    /// Walk the redirect chain starting at `path`.
    ///
    /// Returns the terminal record, or `None` when the first lookup misses or
    /// a redirect points at a path with no record (broken chain).
    ///
    /// # Errors
    ///
    /// [`ResolveError::RedirectCycleDetected`] when a request path is visited
    /// twice or more than `max_hops` redirects are followed;
    /// [`ResolveError::Backend`] when the store fails.
    pub fn walk(
        &self,
        path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewriteRecord>, ResolveError> {
        let mut record = self.lookup(path, store_id)?;
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(path.to_owned());
        let mut hops = 0usize;

        while let Some(current) = record {
            if !current.is_redirect() {
                return Ok(Some(current));
            }

            hops += 1;
            let next = current.target_path;
            if hops > self.max_hops || !visited.insert(next.clone()) {
                warn!(
                    path = %path,
                    store_id,
                    hops,
                    revisited = %next,
                    max_hops = self.max_hops,
                    "Redirect chain does not terminate"
                );
                return Err(ResolveError::RedirectCycleDetected {
                    path: path.to_owned(),
                    hops,
                });
            }

            debug!(
                from = %current.request_path,
                to = %next,
                redirect_type = current.redirect_type,
                hop = hops,
                "Following redirect"
            );
            record = self.lookup(&next, store_id)?;
        }

        debug!(path = %path, store_id, hops, "Redirect chain dead-ends");
        Ok(None)
    }

    fn lookup(
        &self,
        path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewriteRecord>, ResolveError> {
        let filter = RewriteFilter::RequestPath { path, store_id };
        Ok(self.store.find_one(&filter)?)
    }
}
