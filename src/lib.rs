//! guialocal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::time::resolve_now;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // "now" is resolved once, here, and passed down: the core never reads
    // the clock on its own.
    let now = resolve_now(cli.now.as_deref())?;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg, now),
        Commands::Categories => cli::commands::categories::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, now),
        Commands::Pharmacy { .. } => cli::commands::pharmacy::handle(&cli.command, cfg, now),
        Commands::Watch { .. } => {
            cli::commands::watch::handle(&cli.command, cfg, cli.now.as_deref())
        }
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load();

    // 3️⃣ applica eventuale override del dataset da riga di comando
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
