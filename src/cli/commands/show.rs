use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::render_detail;
use crate::db::pool::DbPool;
use crate::db::queries::{load_event, resolve_event_id};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::theme::accent_color;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let id = resolve_event_id(&pool.conn, id)?;
        let ev = load_event(&pool.conn, &id)?.ok_or_else(|| AppError::EventNotFound(id.to_string()))?;

        header(ev.summary(today), accent_color(&cfg.color_theme));
        println!("{}", render_detail(&ev, today));
    }

    Ok(())
}
