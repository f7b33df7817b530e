use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pharmacy::current_on_duty;
use crate::data::Directory;
use crate::errors::AppResult;
use crate::utils::time::{format_stamp, resolve_now};
use std::thread;
use std::time::Duration;

/// Handle the `watch` command: the host loop of the periodic open/closed
/// re-evaluation. Each tick re-runs the pure evaluator over the directory
/// and prints a status line; recomputation is idempotent, so a tick can be
/// repeated or discarded without harm. Ticks never overlap: the loop sleeps
/// on this thread between refreshes.
pub fn handle(cmd: &Commands, cfg: &Config, pinned_now: Option<&str>) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let interval = interval.unwrap_or(cfg.refresh_interval_secs);

        let mut dir = Directory::load(cfg)?;
        let pharmacies = dir.pharmacies();

        println!(
            "👀 Vigilando {} negocios (cada {}s, Ctrl-C para salir)\n",
            dir.businesses.len(),
            interval
        );

        let mut tick: u32 = 0;
        loop {
            tick += 1;
            let now = resolve_now(pinned_now)?;
            dir.refresh_open_states(now);

            let on_duty = current_on_duty(&pharmacies, now)
                .map(|p| p.name.as_str())
                .unwrap_or("no hay turno");

            println!(
                "[{}] abiertos: {}/{} | farmacia de turno: {}",
                format_stamp(now),
                dir.open_count(),
                dir.businesses.len(),
                on_duty
            );

            if *ticks != 0 && tick >= *ticks {
                break;
            }
            thread::sleep(Duration::from_secs(interval));
        }
    }
    Ok(())
}
