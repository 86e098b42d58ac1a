use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
        theme,
        import_json,
    } = cmd
    {
        let path = Config::config_file();

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *migrate {
            ConfigLogic::migrate(&path)?;
        }

        let mut cfg = cfg.clone();

        if let Some(json) = import_json {
            ConfigLogic::import_json(&mut cfg, Path::new(json), !is_test)?;
        }

        if let Some(theme) = theme {
            ConfigLogic::set_theme(&mut cfg, theme, !is_test)?;
        }

        if *print_config {
            ConfigLogic::print(&cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
