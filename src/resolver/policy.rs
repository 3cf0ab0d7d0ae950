use std::sync::Arc;
use tracing::debug;

use super::entity::{EntityType, Enrichment};
use crate::catalog::{
    CategoryRepository, Product, ProductRepository, StockLookup, StoreConfig, StoreContext,
};
use crate::error::ResolveError;

/// Enrichment and visibility rules applied after the redirect chain is resolved.
///
/// Running after chain resolution means a redirect to a since-disabled entity
/// is reported as not found.
pub(crate) struct EntityPolicy {
    pub(crate) products: Arc<dyn ProductRepository>,
    pub(crate) stock: Arc<dyn StockLookup>,
    pub(crate) categories: Arc<dyn CategoryRepository>,
    pub(crate) config: Arc<dyn StoreConfig>,
}

impl EntityPolicy {
    /// `Ok(None)` means the entity exists in the rewrite table but must not be shown.
    pub(crate) fn apply(
        &self,
        entity_type: &EntityType,
        id: u64,
        store: &StoreContext,
    ) -> Result<Option<Enrichment>, ResolveError> {
        match entity_type {
            EntityType::Product => self.product(id, store),
            EntityType::Category => self.category(id, store),
            EntityType::CmsPage | EntityType::Other(_) => Ok(Some(Enrichment::None)),
        }
    }

    fn product(&self, id: u64, store: &StoreContext) -> Result<Option<Enrichment>, ResolveError> {
        let Some(product) = self.products.get_if_enabled(id, store.website_id)? else {
            debug!(product_id = id, website_id = ?store.website_id, "Product missing or disabled");
            return Ok(None);
        };

        let in_stock = self.in_stock(&product, store)?;
        if !in_stock && !self.config.show_out_of_stock(store.store_id)? {
            debug!(product_id = id, store_id = store.store_id, "Out of stock product hidden");
            return Ok(None);
        }

        Ok(Some(Enrichment::Product {
            sku: product.sku,
            in_stock,
        }))
    }

    fn in_stock(&self, product: &Product, store: &StoreContext) -> Result<bool, ResolveError> {
        if !product.is_configurable() {
            // no stock record counts as out of stock
            return Ok(self.stock.is_in_stock(product.id)?.unwrap_or(false));
        }

        let channel = store.sales_channel();
        let mut total = 0.0;
        for child in self.products.children(product)? {
            total += self.stock.quantity(child.id, channel)?;
        }
        debug!(
            product_id = product.id,
            sales_channel = channel,
            total_qty = total,
            "Configurable stock summed"
        );
        Ok(total > 0.0)
    }

    fn category(&self, id: u64, store: &StoreContext) -> Result<Option<Enrichment>, ResolveError> {
        match self.categories.get(id, store.store_id)? {
            Some(category) if category.is_active => Ok(Some(Enrichment::Category {
                display_mode: category.display_mode,
                sort_by: category.default_sort_by,
            })),
            _ => {
                debug!(category_id = id, store_id = store.store_id, "Category missing or inactive");
                Ok(None)
            }
        }
    }
}
