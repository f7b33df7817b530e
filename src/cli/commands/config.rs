use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            let path = Config::config_file();
            if !path.exists() {
                messages::warning(format!(
                    "No configuration file at {} (run `guialocal init`)",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_fields();
            if missing.is_empty() {
                messages::success("Configuration file is complete");
            } else {
                for field in missing {
                    messages::warning(format!("Missing field: {}", field));
                }
                messages::info("Defaults are applied for missing fields");
            }
        }
    }

    Ok(())
}
