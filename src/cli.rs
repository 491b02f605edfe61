// CLI module - command-line argument parsing and handlers
//
// With no subcommand the interactive TUI runs. Subcommands:
// - search [QUERY] [--json]: one-shot search, results on stdout
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Product search - live catalog search in the terminal
#[derive(Parser, Debug)]
#[command(name = "product-search")]
#[command(version = VERSION)]
#[command(about = "Search a product catalog as you type", long_about = None)]
pub struct Cli {
    /// Catalog API base URL (overrides config and PRODUCT_SEARCH_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Serve the built-in demo catalog locally and search that
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search once and print the results (empty query lists the whole catalog)
    Search {
        /// Search terms; joined with spaces
        query: Vec<String>,

        /// Print the products as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Apply flag overrides on top of env/file/default configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if self.demo {
            config.demo_mode = true;
        }
    }
}

/// Run the `config` subcommand
pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: product-search config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", render_effective(&config));

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

/// Effective values, one `key = value` per line
fn render_effective(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("api_url = {:?}\n", config.api_url));
    out.push_str(&format!("debounce_ms = {}\n", config.debounce_ms));
    out.push_str(&format!(
        "request_timeout_secs = {}\n",
        config.request_timeout_secs
    ));
    out.push_str(&format!("theme = {:?}\n", config.theme));
    out.push_str(&format!("demo = {}\n", config.demo_mode));
    out.push('\n');
    out.push_str("[logging]\n");
    out.push_str(&format!("level = {:?}\n", config.logging.level));
    out.push_str(&format!("file_enabled = {}\n", config.logging.file_enabled));
    out.push_str(&format!(
        "file_dir = {:?}\n",
        config.logging.file_dir.display().to_string()
    ));
    out.push_str(&format!(
        "file_rotation = {:?}\n",
        config.logging.file_rotation.as_str()
    ));
    out.push_str(&format!("file_prefix = {:?}\n", config.logging.file_prefix));
    out
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
