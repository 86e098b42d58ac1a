//! Configuration upkeep: detect and fill missing keys, import the JSON
//! settings document of the desktop application.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::theme::is_known_theme;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const REQUIRED_KEYS: [&str; 5] = ["database", "color_theme", "categories", "images", "images_dir"];

/// Return the required keys absent from the YAML document in `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None if yaml.is_null() => return Ok(REQUIRED_KEYS.to_vec()),
        None => return Err(AppError::Config("configuration is not a mapping".into())),
    };

    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add the missing keys with their default value, keeping everything else
/// (including keys this version does not know about) as it is.
///
/// Returns the YAML text to write back and the keys that were added.
pub fn fill_missing_keys(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let missing = missing_keys(content)?;
    if missing.is_empty() {
        return Ok((content.to_string(), missing));
    }

    let mut yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
    if yaml.is_null() {
        yaml = Value::Mapping(Mapping::new());
    }

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    if let (Some(map), Some(defaults)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.to_string());
            if let Some(v) = defaults.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let text = serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
    Ok((text, missing))
}

/// Run [`fill_missing_keys`] on the config file on disk.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (text, added) = fill_missing_keys(&content)?;
    if !added.is_empty() {
        fs::write(path, text).map_err(|_| AppError::ConfigSave)?;
    }
    Ok(added)
}

/// `settings.json` of the desktop application.
#[derive(Debug, Deserialize)]
struct LegacySettings {
    color_theme: Option<String>,
    categories: Option<Vec<String>>,
    images: Option<Vec<String>>,
}

/// Merge a legacy JSON settings document into `cfg`. Keys absent from the
/// document leave the current value alone. Returns the keys that were taken.
pub fn import_legacy_settings(cfg: &mut Config, json: &str) -> AppResult<Vec<&'static str>> {
    let legacy: LegacySettings = serde_json::from_str(json)
        .map_err(|e| AppError::Config(format!("cannot parse legacy settings: {e}")))?;

    let mut taken = Vec::new();

    match legacy.color_theme {
        Some(theme) if is_known_theme(&theme) => {
            cfg.color_theme = theme;
            taken.push("color_theme");
        }
        Some(theme) => warning(format!(
            "Unknown color theme '{theme}' in legacy settings; keeping {}",
            cfg.color_theme
        )),
        None => {}
    }
    if let Some(categories) = legacy.categories {
        cfg.categories = categories;
        taken.push("categories");
    }
    if let Some(images) = legacy.images {
        // The desktop app stored names with trailing whitespace now and then.
        cfg.images = images.into_iter().map(|i| i.trim_end().to_string()).collect();
        taken.push("images");
    }

    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::theme::DEFAULT_THEME;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("database: x\ncolor_theme: dark_teal.xml\n").unwrap();
        assert_eq!(missing, vec!["categories", "images", "images_dir"]);
        assert_eq!(missing_keys("").unwrap(), REQUIRED_KEYS.to_vec());
    }

    #[test]
    fn fills_missing_keys_and_keeps_unknown_ones() {
        let (text, added) = fill_missing_keys("database: x\nextra: 1\n").unwrap();
        assert_eq!(added, vec!["color_theme", "categories", "images", "images_dir"]);

        let cfg = Config::from_yaml(&text).unwrap();
        assert_eq!(cfg.database, "x");
        assert_eq!(cfg.categories, Config::default().categories);
        assert!(text.contains("extra: 1"));
    }

    #[test]
    fn complete_file_is_untouched() {
        let full = Config::default().to_yaml().unwrap();
        let (text, added) = fill_missing_keys(&full).unwrap();
        assert!(added.is_empty());
        assert_eq!(text, full);
    }

    #[test]
    fn imports_legacy_json() {
        let mut cfg = Config::default();
        let json = r#"{
            "color_theme": "light_blue.xml",
            "categories": ["_all", "_week", "_events", "_birthdays", "family"],
            "images": ["cake.png\n", "ball.png"]
        }"#;

        let taken = import_legacy_settings(&mut cfg, json).unwrap();
        assert_eq!(taken, vec!["color_theme", "categories", "images"]);
        assert_eq!(cfg.color_theme, "light_blue.xml");
        assert_eq!(cfg.categories.last().map(String::as_str), Some("family"));
        assert_eq!(cfg.images, vec!["cake.png", "ball.png"]);
    }

    #[test]
    fn legacy_json_with_500_theme_is_imported() {
        let mut cfg = Config::default();
        let json = r#"{"color_theme": "light_cyan_500.xml", "categories": ["_all", "family"], "images": []}"#;

        let taken = import_legacy_settings(&mut cfg, json).unwrap();
        assert_eq!(taken, vec!["color_theme", "categories", "images"]);
        assert_eq!(cfg.color_theme, "light_cyan_500.xml");
        assert_eq!(cfg.categories, vec!["_all", "family"]);
        assert!(cfg.images.is_empty());
    }

    #[test]
    fn unknown_legacy_theme_keeps_current_one_but_imports_lists() {
        let mut cfg = Config::default();
        let json = r#"{"color_theme": "neon.xml", "categories": ["_all", "family"]}"#;

        let taken = import_legacy_settings(&mut cfg, json).unwrap();
        assert_eq!(taken, vec!["categories"]);
        assert_eq!(cfg.color_theme, DEFAULT_THEME);
        assert_eq!(cfg.categories, vec!["_all", "family"]);
    }
}
