mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use ahmia_core::config::AppConfig;

use crate::cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    // One index request per invocation; no need for a worker pool.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
        warn!(path = %cli.config, "config file not found, using defaults");
        include_str!("../config/default.toml").to_string()
    });
    let mut config: AppConfig = toml::from_str(&config_str)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());

    info!(
        environment = %ahmia_core::get_environment(&config.general),
        index = %config.elasticsearch.tor_index,
        "config loaded"
    );

    let code = match cli.command {
        Commands::Onion { value } => commands::validate::onion(&value),
        Commands::Url { url, full } => commands::validate::url(&url, full),
        Commands::Redirect { url } => commands::validate::redirect(&config, &url),
        Commands::Domain { url } => commands::validate::domain(&url),
        Commands::Status { domain } => commands::status::run(config, domain).await?,
        Commands::Submit { url } => commands::status::submit(config, url).await?,
        Commands::Env => {
            commands::env::run(&config);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
