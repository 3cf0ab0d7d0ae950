//! # Catalog Module
//!
//! Read-only collaborator contracts the resolver consumes: product and category
//! repositories, stock lookup, store configuration, and custom URL location.
//!
//! The resolver never decides how entities are stored. Production deployments
//! implement these traits over their own persistence; [`InMemoryCatalog`] backs
//! the CLI and the test-suite with data loaded from a YAML fixture.
//!
//! ```rust
//! use storefront_router::catalog::InMemoryCatalog;
//!
//! let catalog = InMemoryCatalog::from_yaml_str(r#"
//! rewrites:
//!   - request_path: blue-shirt.html
//!     target_path: catalog/product/view/id/42
//!     entity_type: product
//!     entity_id: 42
//!     store_id: 1
//! products:
//!   - id: 42
//!     sku: SHIRT-BLUE
//!     enabled: true
//! stock:
//!   - product_id: 42
//!     in_stock: true
//! "#).unwrap();
//! assert_eq!(catalog.rewrite_count(), 1);
//! ```

mod core;
mod memory;

pub use core::{
    Category, CategoryRepository, CustomUrlLocator, Product, ProductRepository, StockLookup,
    StoreConfig, StoreContext, WebsiteId, CONFIGURABLE_TYPE_ID, DEFAULT_WEBSITE_ID,
};
pub use memory::{CatalogFixture, CategoryFixture, InMemoryCatalog, ProductFixture, StockFixture};
