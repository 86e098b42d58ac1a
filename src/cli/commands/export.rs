use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        force,
    } = cmd
    {
        let catalog = cfg.catalog();
        let selected = Category::parse(
            category
                .as_deref()
                .unwrap_or_else(|| catalog.default_selector()),
        );

        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, &selected, today, *force)?;
    }

    Ok(())
}
