use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::Directory;
use crate::errors::{AppError, AppResult};
use crate::models::business::Business;
use crate::models::weekday::{DutyDay, ScheduleDay};
use crate::ui::messages;
use crate::utils::colors::{GREEN, RESET, open_badge};
use crate::utils::formatting::wrap_description;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{Datelike, NaiveDateTime};

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Show { business } = cmd {
        let dir = Directory::load_refreshed(cfg, now)?;

        let found = dir
            .find(business)
            .ok_or_else(|| AppError::BusinessNotFound(business.clone()))?;

        print_detail(&dir, found, cfg, now);
    }
    Ok(())
}

fn print_detail(dir: &Directory, b: &Business, cfg: &Config, now: NaiveDateTime) {
    let category = dir.category_name(&b.category).unwrap_or(&b.category);

    let title = if b.featured {
        format!("{} ⭐", b.name)
    } else {
        b.name.clone()
    };
    println!("{}  [{}]  {}\n", Colour::Cyan.bold().paint(title), category, open_badge(b.is_open));

    println!("{}\n", wrap_description(&b.description, 72));

    println!("📍 {}", b.address);
    println!("🌐 {}", b.map_link());
    if let Some(url) = &b.map_embed_url {
        println!("🗺️  {}", url);
    }
    if let Some(phone) = &b.phone {
        println!("📞 {}", phone);
    }
    if let Some(wa) = &b.whatsapp {
        println!("💬 {}", wa);
    }
    if let Some(email) = &b.email {
        println!("✉️  {}", email);
    }
    if let Some(site) = &b.website {
        println!("🔗 {}", site);
    }
    println!();

    messages::section("Horario");
    print_hours(b, cfg, now);

    if b.is_pharmacy {
        println!();
        messages::section("Farmacia de turno");
        let days: Vec<&str> = b.pharmacy_turns.iter().map(|d| d.name()).collect();
        if days.is_empty() {
            println!("Sin días de turno asignados");
        } else {
            println!("Días de turno: {}", days.join(", "));
        }
        if let Some(phone) = &b.emergency_phone {
            println!("Urgencias: {}", phone);
        }
    }
}

fn print_hours(b: &Business, cfg: &Config, now: NaiveDateTime) {
    let today = ScheduleDay::from_weekday(now.weekday());

    let mut table = Table::new(
        vec![
            Column::new("Día"),
            Column::new("Mañana"),
            Column::new("Tarde"),
        ],
        &cfg.separator_char,
    );

    for day in ScheduleDay::ALL {
        let sched = b.hours.day(day);
        // user-facing labels live in the rotation naming domain
        let label = DutyDay::from(day).name();

        let (label, morning, afternoon) = if day == today {
            (
                format!("{GREEN}{label} ◀{RESET}"),
                format!("{GREEN}{}{RESET}", sched.morning.display()),
                format!("{GREEN}{}{RESET}", sched.afternoon.display()),
            )
        } else {
            (
                label.to_string(),
                sched.morning.display().to_string(),
                sched.afternoon.display().to_string(),
            )
        };

        table.add_row(vec![label, morning, afternoon]);
    }

    println!("{}", table.render());
}
