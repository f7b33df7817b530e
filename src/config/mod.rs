use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::data;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the directory dataset (JSON). Empty → embedded seed data.
    #[serde(default)]
    pub data_file: String,
    /// Seconds between open/closed re-evaluations in `watch`.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_refresh_interval() -> u64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: String::new(),
            refresh_interval_secs: default_refresh_interval(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("guialocal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".guialocal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("guialocal.conf")
    }

    /// Default path of a user-curated dataset file
    pub fn dataset_file() -> PathBuf {
        Self::config_dir().join("directorio.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Names of fields missing from the on-disk config file, for `config --check`.
    pub fn missing_fields() -> Vec<&'static str> {
        let path = Self::config_file();
        if !path.exists() {
            return vec!["data_file", "refresh_interval_secs", "separator_char"];
        }

        let content = fs::read_to_string(&path).unwrap_or_default();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&content).unwrap_or_default();

        ["data_file", "refresh_interval_secs", "separator_char"]
            .into_iter()
            .filter(|f| parsed.get(f).is_none())
            .collect()
    }

    /// Initialize configuration and dataset files
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Dataset path: user provided or none (embedded seed)
        let data_file = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf().to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            }
        } else {
            String::new()
        };

        let config = Config {
            data_file: data_file.clone(),
            refresh_interval_secs: default_refresh_interval(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Seed a custom dataset file so the user can curate it
        if !data_file.is_empty() {
            let path = PathBuf::from(&data_file);
            if !path.exists() {
                fs::write(&path, data::SEED_JSON)?;
                println!("✅ Dataset:     {:?} (seeded)", path);
            } else {
                println!("✅ Dataset:     {:?}", path);
            }
        } else {
            println!("✅ Dataset:     embedded seed data");
        }

        Ok(())
    }
}
