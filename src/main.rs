// Product Search - search a product catalog as you type
//
// Fetches `{api_url}/products` on startup and `{api_url}/products/search?q=`
// for each settled query, rendering the results as a grid of product cards.
//
// Architecture:
// - Catalog client (reqwest): GETs product lists, classifies failures
// - Search controller: debounces input, drives loading/error/grid state
// - TUI (ratatui): Search box, status line and card grid
// - Headless `search` subcommand: one fetch, results on stdout
// - Demo server (axum): Built-in catalog served on loopback

mod catalog;
mod cli;
mod config;
mod debounce;
mod demo;
mod logging;
mod search;
mod tui;
mod util;

use anyhow::Result;
use catalog::{Endpoints, HttpCatalog};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::LogBuffer;
use search::SearchController;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management exits early
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: CLI flags > env > config file > defaults
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    // TUI mode captures logs into a buffer (keeps the alternate screen clean);
    // headless mode logs to stderr so stdout carries only results
    let headless = matches!(cli.command, Some(Commands::Search { .. }));
    let log_buffer = LogBuffer::new();
    let log_guard = logging::init(
        &config.logging,
        (!headless).then(|| log_buffer.clone()),
    );

    let demo_server = if config.demo_mode {
        let server = demo::spawn(demo::loopback()).await?;
        config.api_url = server.base_url().to_string();
        Some(server)
    } else {
        None
    };

    let endpoints = Endpoints::new(&config.api_url)?;
    tracing::info!(api = %config.api_url, "Product search starting");

    let source = HttpCatalog::new(config.request_timeout())?;
    let controller = SearchController::new(Arc::new(source), endpoints, config.debounce());

    let failed = match cli.command {
        Some(Commands::Search { query, json }) => {
            let products = controller.search_now(&query.join(" ")).await;
            let state = controller.snapshot();

            match state.error {
                Some(message) => {
                    eprintln!("{}", message);
                    true
                }
                None => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&products)?);
                    } else {
                        print!("{}", state.grid.to_plain_text());
                    }
                    false
                }
            }
        }
        _ => {
            tracing::info!("Starting TUI");
            if let Err(e) = tui::run_tui(controller, log_buffer, &config).await {
                tracing::error!("TUI error: {:?}", e);
                eprintln!("TUI error: {:#}", e);
            }
            false
        }
    };

    if let Some(server) = demo_server {
        server.shutdown().await;
    }

    tracing::debug!("Shutting down...");

    if failed {
        // Flush the file writer before exiting
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}
