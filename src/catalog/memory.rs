use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::core::{
    Category, CategoryRepository, CustomUrlLocator, Product, ProductRepository, StockLookup,
    StoreConfig, WebsiteId,
};
use crate::rewrite::{RewriteFilter, RewriteStore, StoreId, UrlRewriteRecord};

/// Product entry of a YAML catalog fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    pub id: u64,
    pub sku: String,
    #[serde(default = "simple_type")]
    pub type_id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Websites the product is assigned to; empty means every website
    #[serde(default)]
    pub website_ids: Vec<WebsiteId>,
    /// Child product ids of a configurable product
    #[serde(default)]
    pub children: Vec<u64>,
}

fn simple_type() -> String {
    "simple".to_string()
}

fn enabled_by_default() -> bool {
    true
}

/// Category entry of a YAML catalog fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFixture {
    #[serde(flatten)]
    pub category: Category,
    /// Per-store override of `is_active`
    #[serde(default)]
    pub store_is_active: HashMap<StoreId, bool>,
}

impl CategoryFixture {
    fn for_store(&self, store_id: StoreId) -> Category {
        let mut category = self.category.clone();
        if let Some(active) = self.store_is_active.get(&store_id) {
            category.is_active = *active;
        }
        category
    }
}

/// Stock entry of a YAML catalog fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct StockFixture {
    pub product_id: u64,
    /// Explicit stock flag; derived from `qty > 0` when omitted
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub qty: f64,
    /// Sales channel of the quantity; `None` applies to every channel
    #[serde(default)]
    pub website_id: Option<WebsiteId>,
}

/// Whole catalog fixture as stored in YAML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    pub rewrites: Vec<UrlRewriteRecord>,
    pub products: Vec<ProductFixture>,
    pub categories: Vec<CategoryFixture>,
    pub stock: Vec<StockFixture>,
    /// Alias path -> canonical storefront path
    pub custom_urls: HashMap<String, String>,
    pub show_out_of_stock: bool,
    /// Per-store override of `show_out_of_stock`
    pub store_show_out_of_stock: HashMap<StoreId, bool>,
}

/// Catalog held entirely in memory, indexed for the resolver's lookups.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    rewrites: Vec<UrlRewriteRecord>,
    by_request_path: HashMap<(StoreId, String), usize>,
    by_target_path: HashMap<(StoreId, String), usize>,
    products: HashMap<u64, ProductFixture>,
    categories: HashMap<u64, CategoryFixture>,
    stock: HashMap<u64, Vec<StockFixture>>,
    custom_urls: HashMap<String, String>,
    show_out_of_stock: bool,
    store_show_out_of_stock: HashMap<StoreId, bool>,
}

impl InMemoryCatalog {
    /// Build the indexes for `fixture`.
    ///
    /// When two rewrite records share a request (or target) path in the same
    /// store, the first one wins, mirroring a `LIMIT 1` lookup.
    #[must_use]
    pub fn from_fixture(fixture: CatalogFixture) -> Self {
        let mut by_request_path = HashMap::with_capacity(fixture.rewrites.len());
        let mut by_target_path = HashMap::with_capacity(fixture.rewrites.len());
        for (idx, record) in fixture.rewrites.iter().enumerate() {
            by_request_path
                .entry((record.store_id, record.request_path.clone()))
                .or_insert(idx);
            by_target_path
                .entry((record.store_id, record.target_path.clone()))
                .or_insert(idx);
        }

        let products: HashMap<u64, ProductFixture> =
            fixture.products.into_iter().map(|p| (p.id, p)).collect();
        for product in products.values() {
            for child in &product.children {
                if !products.contains_key(child) {
                    warn!(
                        product_id = product.id,
                        child_id = child,
                        "Configurable product references unknown child"
                    );
                }
            }
        }

        let mut stock: HashMap<u64, Vec<StockFixture>> = HashMap::new();
        for entry in fixture.stock {
            stock.entry(entry.product_id).or_default().push(entry);
        }

        let catalog = Self {
            rewrites: fixture.rewrites,
            by_request_path,
            by_target_path,
            products,
            categories: fixture
                .categories
                .into_iter()
                .map(|c| (c.category.id, c))
                .collect(),
            stock,
            custom_urls: fixture.custom_urls,
            show_out_of_stock: fixture.show_out_of_stock,
            store_show_out_of_stock: fixture.store_show_out_of_stock,
        };

        info!(
            rewrites = catalog.rewrites.len(),
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "In-memory catalog loaded"
        );
        catalog
    }

    /// Parse a YAML fixture.
    ///
    /// # Errors
    ///
    /// Returns an error when the YAML does not match [`CatalogFixture`].
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let fixture: CatalogFixture = serde_yaml::from_str(yaml)
            .context("Failed to parse catalog fixture")?;
        Ok(Self::from_fixture(fixture))
    }

    /// Load a YAML fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog fixture {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid catalog fixture {}", path.display()))
    }

    /// All rewrite records in fixture order.
    #[must_use]
    pub fn rewrites(&self) -> &[UrlRewriteRecord] {
        &self.rewrites
    }

    #[must_use]
    pub fn rewrite_count(&self) -> usize {
        self.rewrites.len()
    }
}

impl RewriteStore for InMemoryCatalog {
    fn find_one(&self, filter: &RewriteFilter<'_>) -> anyhow::Result<Option<UrlRewriteRecord>> {
        let key = (filter.store_id(), filter.path().to_owned());
        let idx = match filter {
            RewriteFilter::RequestPath { .. } => self.by_request_path.get(&key),
            RewriteFilter::TargetPath { .. } => self.by_target_path.get(&key),
        };
        Ok(idx.and_then(|i| self.rewrites.get(*i)).cloned())
    }
}

impl ProductRepository for InMemoryCatalog {
    fn get_if_enabled(
        &self,
        id: u64,
        website_id: Option<WebsiteId>,
    ) -> anyhow::Result<Option<Product>> {
        let product = self.products.get(&id).filter(|p| {
            p.enabled
                && website_id
                    .map(|w| p.website_ids.is_empty() || p.website_ids.contains(&w))
                    .unwrap_or(true)
        });
        Ok(product.map(|p| Product {
            id: p.id,
            sku: p.sku.clone(),
            type_id: p.type_id.clone(),
        }))
    }

    fn children(&self, product: &Product) -> anyhow::Result<Vec<Product>> {
        let Some(parent) = self.products.get(&product.id) else {
            return Ok(Vec::new());
        };
        Ok(parent
            .children
            .iter()
            .filter_map(|id| self.products.get(id))
            .map(|p| Product {
                id: p.id,
                sku: p.sku.clone(),
                type_id: p.type_id.clone(),
            })
            .collect())
    }
}

impl StockLookup for InMemoryCatalog {
    fn is_in_stock(&self, product_id: u64) -> anyhow::Result<Option<bool>> {
        Ok(self.stock.get(&product_id).map(|entries| {
            entries
                .iter()
                .any(|e| e.in_stock.unwrap_or(e.qty > 0.0))
        }))
    }

    fn quantity(&self, product_id: u64, website_id: WebsiteId) -> anyhow::Result<f64> {
        Ok(self
            .stock
            .get(&product_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.website_id.map(|w| w == website_id).unwrap_or(true))
                    .map(|e| e.qty)
                    .sum()
            })
            .unwrap_or(0.0))
    }
}

impl CategoryRepository for InMemoryCatalog {
    fn get(&self, id: u64, store_id: StoreId) -> anyhow::Result<Option<Category>> {
        Ok(self.categories.get(&id).map(|c| c.for_store(store_id)))
    }
}

impl StoreConfig for InMemoryCatalog {
    fn show_out_of_stock(&self, store_id: StoreId) -> anyhow::Result<bool> {
        Ok(self
            .store_show_out_of_stock
            .get(&store_id)
            .copied()
            .unwrap_or(self.show_out_of_stock))
    }
}

impl CustomUrlLocator for InMemoryCatalog {
    fn locate(&self, path: &str) -> Option<String> {
        self.custom_urls.get(path).cloned()
    }
}
