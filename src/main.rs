use clap::Parser;
use svcprobe::utils::logger;
use svcprobe::{Catalog, CliConfig, Invoker};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting svcprobe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // The catalog load is all-or-nothing: any invalid record aborts startup.
    let catalog = match Catalog::from_file(&config.config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog from {}: {}", config.config, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        eprintln!("❌ No applications are configured in {}", config.config);
        std::process::exit(1);
    }

    tracing::info!(
        "Loaded {} application(s) from {}",
        catalog.application_count(),
        config.config
    );

    let invoker = Invoker::new()?;
    svcprobe::core::menu::run(&catalog, &invoker)?;

    Ok(())
}
