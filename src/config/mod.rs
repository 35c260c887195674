use crate::core::calculator::week::weekday_from_index;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default = "default_week_start_day")]
    pub week_start_day: i64,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}

fn default_week_start_day() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            week_start_day: default_week_start_day(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimetracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetracker.conf")
    }

    /// Return the default path of the time log
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("data.csv")
    }

    /// Load configuration from the default file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(())
    }

    /// Time log path with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn week_start(&self) -> AppResult<Weekday> {
        weekday_from_index(self.week_start_day)
    }

    /// Write the configuration file with defaults, or the given overrides.
    /// With `is_test` nothing is written.
    pub fn init_all(
        custom_store: Option<String>,
        week_start_day: Option<i64>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();

        let mut config = Config::default();
        if let Some(wd) = week_start_day {
            weekday_from_index(wd)?;
            config.week_start_day = wd;
        }
        if let Some(name) = custom_store {
            let p = expand_tilde(&name);
            config.store = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
