use crate::config::Config;
use crate::config::migrate::{import_legacy_settings, migrate_config_file, missing_keys};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::theme::{is_known_theme, list_themes};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report required keys missing from the config file on disk.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use)",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = missing_keys(&content)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning("No configuration file to migrate; run `rdates init` first.");
            return Ok(());
        }
        let added = migrate_config_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added missing keys: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Switch the colour theme and write the configuration back.
    pub fn set_theme(cfg: &mut Config, theme: &str, persist: bool) -> AppResult<()> {
        if !is_known_theme(theme) {
            return Err(AppError::UnknownTheme(format!(
                "{theme} (available: {})",
                list_themes().join(", ")
            )));
        }

        cfg.color_theme = theme.to_string();
        if persist {
            cfg.save()?;
        }

        if let Ok(pool) = DbPool::new(&cfg.database) {
            ttlog_quiet(&pool.conn, "theme", theme, "Color theme changed");
        }
        success(format!("Color theme set to {theme}"));
        Ok(())
    }

    /// Merge the desktop application's `settings.json` into the config.
    pub fn import_json(cfg: &mut Config, json_path: &Path, persist: bool) -> AppResult<()> {
        let json = fs::read_to_string(json_path)?;
        let taken = import_legacy_settings(cfg, &json)?;
        if persist {
            cfg.save()?;
        }
        success(format!(
            "Imported {} from {}",
            if taken.is_empty() {
                "nothing".to_string()
            } else {
                taken.join(", ")
            },
            json_path.display()
        ));
        Ok(())
    }

    /// Open the config file in an editor, falling back to the platform
    /// default when the requested one cannot be started.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using fallback '{default_editor}'"));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration file using '{default_editor}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_is_rejected_without_change() {
        let mut cfg = Config::default();
        let before = cfg.clone();
        let err = ConfigLogic::set_theme(&mut cfg, "neon.xml", false).unwrap_err();
        assert!(matches!(err, AppError::UnknownTheme(_)));
        assert_eq!(cfg, before);
    }

    #[test]
    fn check_reports_missing_keys() {
        let path = std::env::temp_dir().join("rdates_unit_check.conf");
        fs::write(&path, "database: x\n").unwrap();
        let missing = ConfigLogic::check(&path).unwrap();
        assert_eq!(missing, vec!["color_theme", "categories", "images", "images_dir"]);
        fs::remove_file(&path).ok();
    }
}
