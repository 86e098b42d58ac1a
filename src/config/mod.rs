use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::utils::path::resolve_in;
use crate::utils::theme::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_color_theme")]
    pub color_theme: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_images")]
    pub images: Vec<String>,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_color_theme() -> String {
    DEFAULT_THEME.to_string()
}
fn default_categories() -> Vec<String> {
    ["_all", "_week", "_events", "_birthdays", "work", "personal"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_images() -> Vec<String> {
    ["cake.png", "gift.png", "heart.png", "star.png", "bell.png"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_images_dir() -> String {
    "images/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            color_theme: default_color_theme(),
            categories: default_categories(),
            images: default_images(),
            images_dir: default_images_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdates")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdates")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdates.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdates.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = self.to_yaml()?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Categories and icons events may reference.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.categories.clone(), self.images.clone())
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path. In test mode the config file is left
    /// untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => Self::database_file(),
        };

        if !is_test {
            let mut config = Self::load()?;
            config.database = db_path.to_string_lossy().to_string();
            config.save()?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_with_show_all() {
        let cfg = Config::default();
        assert_eq!(cfg.categories.first().map(String::as_str), Some("_all"));
        assert!(cfg.categories.iter().any(|c| c == "_birthdays"));
        assert_eq!(cfg.color_theme, DEFAULT_THEME);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\ncolor_theme: light_red.xml\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.color_theme, "light_red.xml");
        assert_eq!(cfg.categories, default_categories());
        assert_eq!(cfg.images, default_images());
    }

    #[test]
    fn yaml_round_trip() {
        let mut cfg = Config::default();
        cfg.categories.push("travel".into());
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("categories: [unterminated"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn catalog_mirrors_lists() {
        let cfg = Config::default();
        let catalog = cfg.catalog();
        assert_eq!(catalog.categories, cfg.categories);
        assert_eq!(catalog.icons, cfg.images);
    }
}
