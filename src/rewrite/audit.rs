use serde::Serialize;

use super::core::{RewriteStore, StoreId, UrlRewriteRecord};
use super::walker::RedirectChainWalker;
use crate::error::ResolveError;

/// Problem found in a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChainIssue {
    /// The chain revisits a path or exceeds the hop ceiling
    Cycle {
        store_id: StoreId,
        request_path: String,
        hops: usize,
    },
    /// A redirect points at a path with no rewrite record
    DeadEnd {
        store_id: StoreId,
        request_path: String,
    },
}

/// Walk the chain of every redirect record in `records` and report the ones
/// that never reach a terminal record.
///
/// # Errors
///
/// Returns [`ResolveError::Backend`] when the store fails.
pub fn audit_redirects<S: RewriteStore + ?Sized>(
    store: &S,
    records: &[UrlRewriteRecord],
    max_hops: usize,
) -> Result<Vec<ChainIssue>, ResolveError> {
    let walker = RedirectChainWalker::new(store, max_hops);
    let mut issues = Vec::new();
    for record in records.iter().filter(|r| r.is_redirect()) {
        match walker.walk(&record.request_path, record.store_id) {
            Ok(Some(_)) => {}
            Ok(None) => issues.push(ChainIssue::DeadEnd {
                store_id: record.store_id,
                request_path: record.request_path.clone(),
            }),
            Err(ResolveError::RedirectCycleDetected { hops, .. }) => {
                issues.push(ChainIssue::Cycle {
                    store_id: record.store_id,
                    request_path: record.request_path.clone(),
                    hops,
                });
            }
            Err(other) => return Err(other),
        }
    }
    Ok(issues)
}
