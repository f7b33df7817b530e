use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::Directory;
use crate::errors::{AppError, AppResult};
use crate::models::business::Business;
use crate::utils::colors::{colorize_optional, open_badge};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List {
        category,
        open_only,
        featured_only,
    } = cmd
    {
        let dir = Directory::load_refreshed(cfg, now)?;

        let mut selected: Vec<&Business> = match category {
            Some(id) => {
                if dir.category(id).is_none() {
                    return Err(AppError::UnknownCategory(id.clone()));
                }
                dir.by_category(id)
            }
            None => dir.businesses.iter().collect(),
        };

        if *open_only {
            selected.retain(|b| b.is_open);
        }
        if *featured_only {
            selected.retain(|b| b.featured);
        }

        if selected.is_empty() {
            println!("No hay negocios que mostrar.");
            return Ok(());
        }

        print_businesses(&dir, &selected, cfg);
        println!("{} negocios ({} abiertos ahora)", selected.len(), selected.iter().filter(|b| b.is_open).count());
    }
    Ok(())
}

/// Render the shared business table (also used by `search`).
pub fn print_businesses(dir: &Directory, businesses: &[&Business], cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::new("Negocio"),
            Column::new("Categoría"),
            Column::new("Estado"),
            Column::new("Dirección"),
            Column::new("Teléfono"),
        ],
        &cfg.separator_char,
    );

    for b in businesses {
        let name = if b.featured {
            format!("{} ⭐", b.name)
        } else {
            b.name.clone()
        };
        let category = dir.category_name(&b.category).unwrap_or(&b.category);

        table.add_row(vec![
            name,
            category.to_string(),
            open_badge(b.is_open),
            b.address.clone(),
            colorize_optional(b.phone.as_deref()),
        ]);
    }

    println!("{}", table.render());
}
