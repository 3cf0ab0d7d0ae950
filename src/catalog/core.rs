use serde::{Deserialize, Serialize};

use crate::rewrite::StoreId;

/// Identifier of a website (sales channel) grouping store views.
pub type WebsiteId = u32;

/// Sales channel used for stock lookups when the store context names no website.
pub const DEFAULT_WEBSITE_ID: WebsiteId = 0;

/// Product type id of composite products whose stock is the sum of their children.
pub const CONFIGURABLE_TYPE_ID: &str = "configurable";

/// Store scope of a single resolution call, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreContext {
    /// Store view the rewrite lookups are scoped to
    pub store_id: StoreId,
    /// Website of the store view; restricts product lookups when present
    #[serde(default)]
    pub website_id: Option<WebsiteId>,
}

impl StoreContext {
    /// Store scope without a website restriction.
    #[must_use]
    pub fn store(store_id: StoreId) -> Self {
        Self {
            store_id,
            website_id: None,
        }
    }

    /// Restrict product lookups to `website_id`.
    #[must_use]
    pub fn with_website(mut self, website_id: WebsiteId) -> Self {
        self.website_id = Some(website_id);
        self
    }

    /// Sales channel for stock quantity lookups.
    #[must_use]
    pub fn sales_channel(&self) -> WebsiteId {
        self.website_id.unwrap_or(DEFAULT_WEBSITE_ID)
    }
}

/// Product as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub sku: String,
    /// `simple`, `configurable`, `virtual`, ...
    #[serde(default = "default_type_id")]
    pub type_id: String,
}

fn default_type_id() -> String {
    "simple".to_string()
}

impl Product {
    #[must_use]
    pub fn is_configurable(&self) -> bool {
        self.type_id == CONFIGURABLE_TYPE_ID
    }
}

/// Category as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default)]
    pub is_active: bool,
    /// `PRODUCTS`, `PAGE`, `PRODUCTS_AND_PAGE`
    #[serde(default)]
    pub display_mode: Option<String>,
    #[serde(default)]
    pub default_sort_by: Option<String>,
}

/// Product lookups restricted to enabled products.
pub trait ProductRepository: Send + Sync {
    /// Return the product if it exists, is enabled and, when `website_id` is
    /// given, is assigned to that website.
    fn get_if_enabled(
        &self,
        id: u64,
        website_id: Option<WebsiteId>,
    ) -> anyhow::Result<Option<Product>>;

    /// Child products of a configurable product.
    fn children(&self, product: &Product) -> anyhow::Result<Vec<Product>>;
}

/// Stock state provider. The resolver never computes stock levels itself.
pub trait StockLookup: Send + Sync {
    /// Stock flag of a plain product, `None` when no stock record exists.
    fn is_in_stock(&self, product_id: u64) -> anyhow::Result<Option<bool>>;

    /// Salable quantity of a product in the given sales channel.
    fn quantity(&self, product_id: u64, website_id: WebsiteId) -> anyhow::Result<f64>;
}

/// Category lookups scoped to a store view.
pub trait CategoryRepository: Send + Sync {
    fn get(&self, id: u64, store_id: StoreId) -> anyhow::Result<Option<Category>>;
}

/// Store-scoped configuration flags.
pub trait StoreConfig: Send + Sync {
    /// "Display out of stock products" setting for the store view.
    fn show_out_of_stock(&self, store_id: StoreId) -> anyhow::Result<bool>;
}

/// Maps arbitrary paths (CMS aliases and the like) to canonical storefront paths.
pub trait CustomUrlLocator: Send + Sync {
    fn locate(&self, path: &str) -> Option<String>;
}
