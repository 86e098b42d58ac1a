use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::RECURRING_GROUP;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::table::Table;
use rusqlite::Connection;
use std::fs;

/// Number of stored events per category, most populated first.
pub fn count_by_category(conn: &Connection) -> AppResult<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM events
         GROUP BY category
         ORDER BY COUNT(*) DESC, category ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EVENTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let recurring: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events WHERE category = ?1",
        [RECURRING_GROUP],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total events:{} {}{}{} ({} recurring)",
        CYAN, RESET, GREEN, count, RESET, recurring
    );

    //
    // 3) YEAR RANGE
    //
    let (first, last): (Option<i64>, Option<i64>) =
        pool.conn
            .query_row("SELECT MIN(year), MAX(year) FROM events", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;
    let fmt = |y: Option<i64>| y.map(|v| v.to_string()).unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Years:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) PER CATEGORY
    //
    let per_category = count_by_category(&pool.conn)?;
    if !per_category.is_empty() {
        println!("{}• By category:{}", CYAN, RESET);
        let mut table = Table::new(vec!["Category", "Events"]);
        for (category, n) in per_category {
            table.add_row(vec![category, n.to_string()]);
        }
        for line in table.render().lines() {
            println!("    {line}");
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::insert_event;
    use crate::models::event::{Event, EventFields};
    use crate::models::event_id::EventId;
    use chrono::NaiveDate;

    #[test]
    fn counts_per_category() {
        let pool = DbPool::in_memory().unwrap();
        for group in ["work", "_birthdays", "work", "personal", "work"] {
            let ev = Event::restore(
                EventId::generate(),
                EventFields {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    title: "x".into(),
                    description: String::new(),
                    icon: None,
                    group: group.into(),
                },
            );
            insert_event(&pool.conn, &ev).unwrap();
        }

        let counts = count_by_category(&pool.conn).unwrap();
        assert_eq!(
            counts,
            vec![
                ("work".to_string(), 3),
                ("_birthdays".to_string(), 1),
                ("personal".to_string(), 1),
            ]
        );
    }
}
