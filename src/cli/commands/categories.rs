use crate::config::Config;
use crate::data::Directory;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let dir = Directory::load(cfg)?;

    let mut table = Table::new(
        vec![
            Column::new("Id"),
            Column::new("Categoría"),
            Column::new("Negocios"),
        ],
        &cfg.separator_char,
    );

    for cat in &dir.categories {
        let count = dir.by_category(&cat.id).len();
        table.add_row(vec![
            cat.id.clone(),
            format!("{} {}", cat.icon, cat.name),
            count.to_string(),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
