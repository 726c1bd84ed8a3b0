use anyhow::Context;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init().context("failed to initialize logging")?;

    let config = stockroom_inventory::InventoryConfig::from_env()
        .context("failed to read inventory configuration")?;
    let format = stockroom_demo::OutputFormat::from_env()?;

    tracing::info!(
        consistency = config.consistency.as_str(),
        ?format,
        "running inventory walkthrough"
    );

    let stdout = std::io::stdout();
    stockroom_demo::run(config, format, stdout.lock())
}
