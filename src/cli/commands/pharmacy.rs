use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pharmacy::{current_on_duty, weekly_schedule};
use crate::data::Directory;
use crate::errors::AppResult;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Pharmacy { week } = cmd {
        let dir = Directory::load(cfg)?;
        let pharmacies = dir.pharmacies();

        // Today's banner
        match current_on_duty(&pharmacies, now) {
            Some(p) => {
                println!(
                    "💊 De turno hoy: {}",
                    Colour::Green.bold().paint(p.name.as_str())
                );
                println!("   {}", p.address);
                if let Some(phone) = &p.emergency_phone {
                    println!("   Urgencias: {}", phone);
                }
            }
            None => println!("💊 De turno hoy: no hay turno"),
        }

        if *week {
            println!("\n📅 Calendario de Farmacias de Turno\n");
            print_week(&pharmacies, cfg);
        }
    }
    Ok(())
}

fn print_week(pharmacies: &[crate::models::business::Business], cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::new("Día"),
            Column::new("Farmacia"),
            Column::new("Urgencias"),
        ],
        &cfg.separator_char,
    );

    for (day, pharmacy) in weekly_schedule(pharmacies) {
        match pharmacy {
            Some(p) => table.add_row(vec![
                day.name().to_string(),
                p.name.clone(),
                colorize_optional(p.emergency_phone.as_deref()),
            ]),
            None => table.add_row(vec![
                day.name().to_string(),
                "No hay turno".to_string(),
                colorize_optional(None),
            ]),
        }
    }

    println!("{}", table.render());
}
