//! Process bootstrap: arguments → config → logging → seeded store → server.

mod setup;

pub use setup::Cli;

use crate::http::server::NotefulServer;
use crate::http::App;
use crate::logging::{flush_logs, init_logging};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use notefulapp::api::NotefulApi;
use notefulapp::config::NotefulConfig;
use notefulapp::store::seed::seeded_store;
use notefulapp::store::NoteStore;

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let store = seeded_store(config.seed_file.as_deref()).context("failed to load seed notes")?;
    let seed_count = store.len();

    let mut app = App::new(NotefulApi::new(store));
    if let Some(dir) = &config.public_dir {
        app = app.with_static_files(dir);
    }

    let server = NotefulServer::bind(&config.bind_addr(), app, config.max_body_bytes)?;
    let addr = server
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|| config.bind_addr());
    info!(
        "event=server_start addr={} seed_count={} static={}",
        addr,
        seed_count,
        config
            .public_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "off".to_string())
    );

    let result = server.run();
    flush_logs();
    result
}

/// File config (if any) with command-line flags layered on top.
pub fn resolve_config(cli: &Cli) -> Result<NotefulConfig> {
    let config_dir = cli.config_dir.clone().or_else(NotefulConfig::default_dir);
    let base = match &config_dir {
        Some(dir) => NotefulConfig::load(dir)
            .with_context(|| format!("failed to load config from {}", dir.display()))?,
        None => NotefulConfig::default(),
    };

    let config = cli.apply(base);
    config.validate()?;
    Ok(config)
}
