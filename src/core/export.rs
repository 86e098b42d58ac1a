use crate::core::filter::load_visible;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{EventExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::category::Category;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the events `selected` shows, in list order, to `file`.
    /// Returns the number of exported events.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        selected: &Category,
        today: NaiveDate,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<EventExport> = load_visible(&pool.conn, selected, today)?
            .iter()
            .map(|ev| EventExport::from_event(ev, today))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} {} events ({})", rows.len(), format.as_str(), selected),
        );

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::add::AddLogic;
    use crate::models::event::EventFields;
    use std::env;
    use std::fs;

    fn seeded_pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        let catalog = Config::default().catalog();
        for (title, date, group) in [
            ("Later", (2024, 9, 1), "work"),
            ("Mum", (1960, 6, 20), "_birthdays"),
            ("Sooner", (2024, 6, 16), "personal"),
        ] {
            AddLogic::apply(
                &pool,
                &catalog,
                EventFields {
                    date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                    title: title.into(),
                    description: "d".into(),
                    icon: None,
                    group: group.into(),
                },
            )
            .unwrap();
        }
        pool
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn json_export_follows_list_order() {
        let pool = seeded_pool();
        let out = env::temp_dir().join("rdates_unit_export.json");
        fs::remove_file(&out).ok();

        let n = ExportLogic::export(
            &pool,
            ExportFormat::Json,
            &out.to_string_lossy(),
            &Category::All,
            today(),
            false,
        )
        .unwrap();
        assert_eq!(n, 3);

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let titles: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Sooner", "Mum", "Later"]);
        assert_eq!(parsed[1]["days_remaining"], 5);
        assert_eq!(parsed[1]["next_occurrence"], "2024-06-20");
    }

    #[test]
    fn csv_export_respects_category() {
        let pool = seeded_pool();
        let out = env::temp_dir().join("rdates_unit_export.csv");
        fs::remove_file(&out).ok();

        let n = ExportLogic::export(
            &pool,
            ExportFormat::Csv,
            &out.to_string_lossy(),
            &Category::Events,
            today(),
            false,
        )
        .unwrap();
        assert_eq!(n, 2);

        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,next_occurrence,days_remaining,title,description,icon,group")
        );
        assert!(!text.contains("Mum"));
        assert!(text.contains("Sooner"));
    }
}
