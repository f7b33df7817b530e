use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::Directory;
use crate::errors::AppResult;
use chrono::NaiveDateTime;

use super::list::print_businesses;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Search { term } = cmd {
        let dir = Directory::load_refreshed(cfg, now)?;
        let matches = dir.search(term);

        if matches.is_empty() {
            println!("Sin resultados para '{}'.", term);
            return Ok(());
        }

        println!("🔎 Resultados para '{}':\n", term);
        print_businesses(&dir, &matches, cfg);
    }
    Ok(())
}
