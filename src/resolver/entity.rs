use serde::{Serialize, Serializer};
use std::fmt;

use crate::rewrite::UrlRewriteRecord;

/// Classified entity type of a rewrite record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    Product,
    Category,
    CmsPage,
    /// Any other rewrite entity type, normalized to upper snake case
    Other(String),
}

impl EntityType {
    /// Classify a raw rewrite tag: uppercase it and replace `-` with `_`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.replace('-', "_").to_uppercase();
        match normalized.as_str() {
            "PRODUCT" => EntityType::Product,
            "CATEGORY" => EntityType::Category,
            "CMS_PAGE" => EntityType::CmsPage,
            _ => EntityType::Other(normalized),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::Product => "PRODUCT",
            EntityType::Category => "CATEGORY",
            EntityType::CmsPage => "CMS_PAGE",
            EntityType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Type-specific data attached by the visibility policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum Enrichment {
    Product {
        sku: String,
        in_stock: bool,
    },
    Category {
        display_mode: Option<String>,
        sort_by: Option<String>,
    },
    #[default]
    None,
}

/// Canonical entity a storefront path resolves to.
///
/// Serializes to the GraphQL `EntityUrl` shape; absent type-specific fields
/// are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntity {
    pub id: u64,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Target path of the terminal rewrite record
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl ResolvedEntity {
    pub(crate) fn new(
        record: UrlRewriteRecord,
        entity_type: EntityType,
        enrichment: Enrichment,
    ) -> Self {
        let mut entity = Self {
            id: record.entity_id,
            entity_type,
            canonical_url: record.target_path,
            sku: None,
            in_stock: None,
            display_mode: None,
            sort_by: None,
        };
        match enrichment {
            Enrichment::Product { sku, in_stock } => {
                entity.sku = Some(sku);
                entity.in_stock = Some(in_stock);
            }
            Enrichment::Category {
                display_mode,
                sort_by,
            } => {
                entity.display_mode = display_mode;
                entity.sort_by = sort_by;
            }
            Enrichment::None => {}
        }
        entity
    }
}
