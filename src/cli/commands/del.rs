use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_event, resolve_event_id};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let id = match resolve_event_id(&pool.conn, id) {
            Ok(id) => id,
            Err(AppError::EventNotFound(raw)) => {
                warning(format!("No event with id {raw}; nothing deleted."));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // Only events still ahead ask for confirmation.
        if !*yes
            && let Some(ev) = load_event(&pool.conn, &id)?
            && ev.days_remaining(today) > 0
            && !confirm(&format!(
                "'{}' is still {} days away. Delete it?",
                ev.title(),
                ev.days_remaining(today)
            ))
        {
            info("Deletion cancelled.");
            return Ok(());
        }

        match DeleteLogic::apply(&pool, id)? {
            Some(ev) => success(format!("Deleted '{}' ({})", ev.title(), ev.id())),
            None => warning(format!("No event with id {id}; nothing deleted.")),
        }
    }

    Ok(())
}
