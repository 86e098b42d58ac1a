use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::load_visible;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_days, colorize_optional};
use crate::utils::date::format_dmy;
use crate::utils::formatting::{pad_right, truncate_label};
use crate::utils::theme::accent_color;
use chrono::NaiveDate;

const LABEL_WIDTH: usize = 34;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List { category } = cmd {
        let catalog = cfg.catalog();
        let selected = Category::parse(
            category
                .as_deref()
                .unwrap_or_else(|| catalog.default_selector()),
        );

        if !selected.is_pseudo() && !catalog.categories.iter().any(|c| c == selected.as_str()) {
            warning(format!("Category '{selected}' is not in the configuration."));
        }

        let pool = DbPool::new(&cfg.database)?;
        let events = load_visible(&pool.conn, &selected, today)?;

        header(
            format!("Today: {}  [{}]", format_dmy(today), selected),
            accent_color(&cfg.color_theme),
        );

        if events.is_empty() {
            info("No events.");
            return Ok(());
        }

        for ev in &events {
            println!("{}", format_line(ev, today));
        }
    }

    Ok(())
}

fn format_line(ev: &Event, today: NaiveDate) -> String {
    let days = ev.days_remaining(today);
    format!(
        "{}{}{} {} {}",
        color_for_days(days),
        pad_right(&truncate_label(&ev.summary(today)), LABEL_WIDTH),
        RESET,
        ev.id().short(),
        colorize_optional(ev.icon())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventFields;
    use crate::models::event_id::EventId;

    #[test]
    fn line_carries_summary_short_id_and_icon() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let ev = Event::restore(
            EventId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            EventFields {
                date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
                title: "Review".into(),
                description: String::new(),
                icon: Some("star.png".into()),
                group: "work".into(),
            },
        );

        let line = format_line(&ev, today);
        assert!(line.contains("5 (days). Review"));
        assert!(line.contains("67e55044"));
        assert!(line.ends_with("star.png"));
    }
}
