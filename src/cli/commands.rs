use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::catalog::{InMemoryCatalog, StoreContext};
use crate::logging::{init_logging_with_config, LogConfig, LogFormat};
use crate::resolver::CanonicalResolver;
use crate::rewrite::audit_redirects;
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for the storefront router
#[derive(Parser)]
#[command(name = "storefront-router")]
#[command(about = "Resolve storefront URLs and audit rewrite data", long_about = None)]
pub struct Cli {
    /// Log level (overrides STOREFRONT_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format: json or pretty (overrides STOREFRONT_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a URL to its canonical entity
    Resolve {
        /// Path to the YAML catalog fixture
        #[arg(short, long)]
        catalog: PathBuf,

        /// Store view the lookup is scoped to
        #[arg(long, default_value_t = 0)]
        store_id: u32,

        /// Website to restrict product lookups to
        #[arg(long)]
        website_id: Option<u32>,

        /// Storefront URL path, e.g. /blue-shirt.html
        url: String,
    },
    /// Report redirect chains that cycle or dead-end
    Audit {
        /// Path to the YAML catalog fixture
        #[arg(short, long)]
        catalog: PathBuf,

        /// Exit with an error when any issue is found
        #[arg(long, default_value_t = false)]
        fail_on_issue: bool,
    },
}

#[derive(Deserialize, Default)]
struct RuntimeSection {
    #[serde(default)]
    runtime: RuntimeConfig,
}

fn load_catalog(path: &Path) -> anyhow::Result<(InMemoryCatalog, RuntimeConfig)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let section: RuntimeSection = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid runtime section in {}", path.display()))?;
    let catalog = InMemoryCatalog::from_yaml_str(&content)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    Ok((catalog, section.runtime.merge_env()))
}

/// Run `cli`, writing command output to `out`.
///
/// # Errors
///
/// Fails when the catalog cannot be loaded, resolution fails, or `audit`
/// finds issues with `--fail-on-issue` set.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve {
            catalog,
            store_id,
            website_id,
            url,
        } => {
            let (catalog, runtime) = load_catalog(catalog)?;
            let resolver = CanonicalResolver::from_catalog(Arc::new(catalog))
                .with_runtime_config(&runtime);
            let mut store = StoreContext::store(*store_id);
            if let Some(website_id) = website_id {
                store = store.with_website(*website_id);
            }
            let payload = resolver.resolve_entity_url(url, &store)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            Ok(())
        }
        Commands::Audit {
            catalog,
            fail_on_issue,
        } => {
            let (catalog, runtime) = load_catalog(catalog)?;
            let issues =
                audit_redirects(&catalog, catalog.rewrites(), runtime.max_redirect_hops)?;
            info!(
                rewrites = catalog.rewrite_count(),
                issues = issues.len(),
                "Redirect audit finished"
            );
            writeln!(out, "{}", serde_json::to_string_pretty(&issues)?)?;
            if *fail_on_issue && !issues.is_empty() {
                bail!("{} redirect chain issue(s) found", issues.len());
            }
            Ok(())
        }
    }
}

/// Parse arguments, initialize logging, and run the selected command.
///
/// # Errors
///
/// See [`execute`].
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if let Some(level) = &cli.log_level {
        log_config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        log_config.format = LogFormat::parse(format);
    }
    init_logging_with_config(&log_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}
