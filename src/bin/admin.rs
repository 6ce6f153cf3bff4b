//! CLI administration tool for alias-shortener.
//!
//! Manages alias mappings directly against the configured store, without
//! going through the HTTP API. Commands use the same workflows as the server,
//! so validation and error messages are identical.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a chosen alias (or omit --alias to generate one)
//! cargo run --bin admin -- url add https://google.com --alias awesome-project
//!
//! # Look up an alias
//! cargo run --bin admin -- url get awesome-project
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete awesome-project
//!
//! # Check storage
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_URL` (optional): SQLite URL, default `sqlite://storage/storage.db`

use alias_shortener::config::{Config, MEMORY_STORAGE};
use alias_shortener::infrastructure::persistence::open_store;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias::AliasGenerator;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage alias mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL
    Add {
        /// Target URL (absolute)
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the target URL of an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    if config.storage_url == MEMORY_STORAGE {
        bail!("STORAGE_URL=memory is per-process; point the admin tool at a SQLite database");
    }

    let store = open_store(&config).await?;
    let state = AppState::new(store, Arc::new(AliasGenerator::new()));

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &state).await?,
        Commands::Db { action } => handle_db_action(action, &state).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, state: &AppState) -> Result<()> {
    match action {
        UrlAction::Add { url, alias } => add_url(state, url, alias).await,
        UrlAction::Get { alias } => get_url(state, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(state, &alias, yes).await,
    }
}

async fn add_url(state: &AppState, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "➕ Save URL".bright_blue().bold());
    println!();

    let alias = state
        .save_service
        .save(url.clone(), alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Alias:  {}", alias.bright_yellow().bold());
    println!("  Target: {}", url.cyan());
    println!();
    println!("{}", "✅ URL saved".green().bold());

    Ok(())
}

async fn get_url(state: &AppState, alias: &str) -> Result<()> {
    let target = state
        .resolve_service
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  {} → {}", alias.bright_yellow(), target.cyan());

    Ok(())
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(state: &AppState, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete alias".bright_blue().bold());
    println!();

    let target = state
        .resolve_service
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Alias:  {}", alias.bright_yellow());
    println!("  Target: {}", target.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .delete_service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "✅ Alias deleted".green().bold());

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue());

            if !state.store.health_check().await {
                bail!("Storage is not reachable");
            }

            println!("{}", "✅ Storage OK".green().bold());
        }
    }

    Ok(())
}
