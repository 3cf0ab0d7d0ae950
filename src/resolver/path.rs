use once_cell::sync::Lazy;
use regex::Regex;

/// `[catalog/]product/view/id/<id>` followed by optional trailing segments.
#[allow(clippy::expect_used)]
static PRODUCT_TARGET_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:catalog/)?product/view/id/(\d+)(?:/|$)")
        .expect("product target path regex is valid")
});

/// Strip exactly one leading `/`, leaving the root path `/` untouched.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    if raw == "/" {
        return raw;
    }
    raw.strip_prefix('/').unwrap_or(raw)
}

/// Collapse a product detail target path to `catalog/product/view/id/<id>`.
///
/// Trailing segments such as `category/5` carry breadcrumb context only and are
/// dropped. Returns `None` when `path` is not a product detail target path.
#[must_use]
pub fn canonical_product_path(path: &str) -> Option<String> {
    PRODUCT_TARGET_PATH
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("catalog/product/view/id/{}", id.as_str()))
}
