fn main() -> anyhow::Result<()> {
    storefront_router::cli::run_cli()
}
