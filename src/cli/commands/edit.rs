use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EventChanges};
use crate::db::pool::DbPool;
use crate::db::queries::resolve_event_id;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        title,
        description,
        icon,
        no_icon,
        group,
    } = cmd
    {
        let changes = EventChanges {
            date: *date,
            title: title.clone(),
            description: description.clone(),
            icon: if *no_icon {
                Some(None)
            } else {
                icon.clone().map(Some)
            },
            group: group.clone(),
        };

        if changes.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let id = resolve_event_id(&pool.conn, id)?;
        let ev = EditLogic::apply(&pool, &cfg.catalog(), id, changes)?;

        success(format!("Updated '{}' ({})", ev.title(), ev.id()));
    }

    Ok(())
}
