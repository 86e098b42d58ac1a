use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventFields;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        title,
        description,
        icon,
        group,
    } = cmd
    {
        let catalog = cfg.catalog();

        let group = match group {
            Some(g) => g.clone(),
            None => catalog
                .default_group()
                .map(str::to_string)
                .ok_or_else(|| AppError::Config("no storable category configured".into()))?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let ev = AddLogic::apply(
            &pool,
            &catalog,
            EventFields {
                date: *date,
                title: title.clone(),
                description: description.clone(),
                icon: icon.clone(),
                group,
            },
        )?;

        success(format!("Added '{}' [{}] with id {}", ev.title(), ev.group(), ev.id()));
    }

    Ok(())
}
