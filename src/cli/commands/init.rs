use crate::config::Config;
use crate::data::Directory;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the dataset file, seeded with the embedded data (only when a custom
///    dataset path was requested with --data)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), false)?;
    } else {
        Config::init_all(None, false)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing guialocal…");
    println!("📄 Config file : {}", path.display());
    if cfg.data_file.is_empty() {
        println!("🗂️  Dataset    : embedded seed data");
    } else {
        println!("🗂️  Dataset    : {}", &cfg.data_file);
    }

    // Sanity-load so a broken dataset surfaces here, not at first use
    let dir = Directory::load(&cfg)?;
    println!(
        "✅ Directory loaded: {} businesses in {} categories",
        dir.businesses.len(),
        dir.categories.len()
    );

    println!("🎉 guialocal initialization completed!");
    Ok(())
}
