//! # storefront-router
//!
//! Resolves arbitrary storefront request paths to canonical catalog entities and
//! drives the front-controller loop that matches a request to a handler action.
//!
//! ## Architecture
//!
//! - **[`rewrite`]** - URL rewrite records and the bounded redirect chain walker
//! - **[`catalog`]** - Collaborator contracts (products, stock, categories, store
//!   config, custom URLs) and an in-memory YAML-backed catalog
//! - **[`resolver`]** - Path normalization, canonical lookup, entity
//!   classification, enrichment and visibility policy
//! - **[`dispatcher`]** - Router list scan, validated-once request processing and
//!   route-type tagging
//! - **[`error`]** - Error taxonomy shared by resolution and dispatch
//! - **[`runtime_config`]**, **[`logging`]**, **[`cli`]** - Ambient configuration,
//!   structured logging and the `storefront-router` binary
//!
//! ### Resolution Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller as GraphQL layer
//!     participant Resolver as CanonicalResolver
//!     participant Walker as RedirectChainWalker
//!     participant Store as RewriteStore
//!     participant Policy as Entity policy
//!
//!     Caller->>Resolver: resolve("/old-shirt.html", store)
//!     Resolver->>Resolver: normalize, collapse product path,<br/>custom URL lookup
//!     Resolver->>Walker: walk("old-shirt.html")
//!     loop until terminal record
//!         Walker->>Store: find_one(request_path)
//!     end
//!     alt no record
//!         Resolver->>Store: find_one(target_path)
//!     end
//!     Resolver->>Policy: enrich(PRODUCT, 42)
//!     Policy-->>Resolver: sku, in_stock / hidden
//!     Resolver-->>Caller: ResolvedEntity or None
//! ```
//!
//! ### Dispatch Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Http as HTTP layer
//!     participant FC as FrontController
//!     participant Router as ActionMatcher
//!     participant Proc as RequestProcessor
//!     participant Action
//!
//!     Http->>FC: dispatch(request)
//!     loop while !dispatched (max 100 cycles)
//!         FC->>Router: match_action(request)
//!         alt matched
//!             FC->>Proc: process(ctx, request, action)
//!             Proc->>Proc: validate once per dispatch
//!             Proc->>Action: execute(request)
//!         else not found
//!             FC->>FC: forward to noroute
//!         end
//!     end
//!     FC-->>Http: DispatchOutcome (result + route type)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_router::catalog::{InMemoryCatalog, StoreContext};
//! use storefront_router::resolver::{CanonicalResolver, EntityType};
//!
//! let catalog = InMemoryCatalog::from_yaml_str(r#"
//! rewrites:
//!   - request_path: men.html
//!     target_path: catalog/category/view/id/5
//!     entity_type: category
//!     entity_id: 5
//!     store_id: 1
//! categories:
//!   - id: 5
//!     is_active: true
//!     display_mode: PRODUCTS
//! "#).unwrap();
//!
//! let resolver = CanonicalResolver::from_catalog(Arc::new(catalog));
//! let entity = resolver.resolve("/men.html", &StoreContext::store(1)).unwrap().unwrap();
//! assert_eq!(entity.entity_type, EntityType::Category);
//! assert_eq!(entity.canonical_url, "catalog/category/view/id/5");
//! ```

pub mod catalog;
pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod ids;
pub mod logging;
pub mod resolver;
pub mod rewrite;
pub mod runtime_config;

pub use catalog::StoreContext;
pub use dispatcher::{DispatchOutcome, FrontController, RouteType, RoutingRequest};
pub use error::{DispatchError, ResolveError};
pub use resolver::{CanonicalResolver, EntityType, ResolvedEntity};
