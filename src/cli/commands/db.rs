use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // Opening the pool already brings the schema up to date; `--migrate`
    // runs the same steps again and reports on them.
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn)?;
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let verdict: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if verdict == "ok" {
            let events: i64 = pool
                .conn
                .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
            success(format!("Integrity check passed ({events} events)."));
        } else {
            error(format!("Integrity check failed: {verdict}"));
        }
    }

    if *vacuum {
        info("Compacting database (VACUUM)…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
