//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use clap::Parser;
use std::io::Write;

const CATALOG: &str = r#"
runtime:
  max_redirect_hops: 4
rewrites:
  - request_path: old-shirt.html
    target_path: blue-shirt.html
    entity_type: product
    entity_id: 42
    redirect_type: 301
    store_id: 1
  - request_path: blue-shirt.html
    target_path: catalog/product/view/id/42
    entity_type: product
    entity_id: 42
    store_id: 1
  - request_path: loop-a.html
    target_path: loop-b.html
    entity_type: category
    entity_id: 5
    redirect_type: 302
    store_id: 1
  - request_path: loop-b.html
    target_path: loop-a.html
    entity_type: category
    entity_id: 5
    redirect_type: 302
    store_id: 1
products:
  - id: 42
    sku: SHIRT-BLUE
stock:
  - product_id: 42
    in_stock: true
"#;

fn catalog_file() -> tempfile::NamedTempFile {
    catalog_file_with(CATALOG)
}

fn catalog_file_with(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_command_parses() {
    let cli = Cli::try_parse_from([
        "storefront-router",
        "resolve",
        "--catalog",
        "catalog.yaml",
        "--store-id",
        "3",
        "/blue-shirt.html",
    ])
    .unwrap();
    match cli.command {
        Commands::Resolve {
            catalog,
            store_id,
            website_id,
            url,
        } => {
            assert_eq!(catalog.to_string_lossy(), "catalog.yaml");
            assert_eq!(store_id, 3);
            assert_eq!(website_id, None);
            assert_eq!(url, "/blue-shirt.html");
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_global_log_flags() {
    let cli = Cli::try_parse_from([
        "storefront-router",
        "audit",
        "--catalog",
        "c.yaml",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_resolve_prints_payload() {
    let file = catalog_file();
    let cli = Cli::try_parse_from([
        "storefront-router",
        "resolve",
        "--catalog",
        file.path().to_str().unwrap(),
        "--store-id",
        "1",
        "/old-shirt.html",
    ])
    .unwrap();
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(payload["id"], 42);
    assert_eq!(payload["type"], "PRODUCT");
    assert_eq!(payload["canonical_url"], "catalog/product/view/id/42");
    assert_eq!(payload["sku"], "SHIRT-BLUE");
}

#[test]
fn test_resolve_unknown_prints_null() {
    let file = catalog_file();
    let cli = Cli::try_parse_from([
        "storefront-router",
        "resolve",
        "--catalog",
        file.path().to_str().unwrap(),
        "--store-id",
        "1",
        "/nothing-here.html",
    ])
    .unwrap();
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().trim(), "null");
}

#[test]
fn test_audit_fails_on_cycle() {
    let file = catalog_file();
    let cli = Cli::try_parse_from([
        "storefront-router",
        "audit",
        "--catalog",
        file.path().to_str().unwrap(),
        "--fail-on-issue",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = execute(&cli, &mut out).unwrap_err();
    assert!(err.to_string().contains("2 redirect chain issue(s)"));
    let issues: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(issues[0]["kind"], "cycle");
}

#[test]
fn test_demo_catalog_resolves_product_deep_link() {
    let demo = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/catalog.yaml");
    let cli = Cli::try_parse_from([
        "storefront-router",
        "resolve",
        "--catalog",
        demo,
        "--store-id",
        "1",
        "--website-id",
        "1",
        "/product/view/id/42/category/5",
    ])
    .unwrap();
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(payload["id"], 42);
    assert_eq!(payload["in_stock"], true);
}

#[test]
fn test_audit_zero_hop_ceiling_uses_default() {
    let yaml = CATALOG.replace("max_redirect_hops: 4", "max_redirect_hops: 0");
    let file = catalog_file_with(&yaml);
    let cli = Cli::try_parse_from([
        "storefront-router",
        "audit",
        "--catalog",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();
    execute(&cli, &mut out).unwrap();
    let issues: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let paths: Vec<&str> = issues
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["request_path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["loop-a.html", "loop-b.html"]);
}
