//! Sort and filter pipeline behind `list` and `export`.

use crate::db::queries::list_all;
use crate::errors::AppResult;
use crate::models::category::{Category, WEEK, is_recurring_group};
use crate::models::event::Event;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Events due within this many days are shown by the `_week` selector.
pub const WEEK_HORIZON_DAYS: i64 = 7;

/// Sort `all` by days remaining and keep the ones `selected` asks for.
///
/// The sort is stable, so events due on the same day keep the order in
/// which they were handed in (storage order).
pub fn visible_events(all: &[Event], selected: &Category, today: NaiveDate) -> Vec<Event> {
    let mut ranked: Vec<(i64, &Event)> = all
        .iter()
        .map(|ev| (ev.days_remaining(today), ev))
        .collect();
    ranked.sort_by_key(|(days, _)| *days);

    ranked
        .into_iter()
        .filter(|(days, ev)| keep(selected, *days, ev))
        .map(|(_, ev)| ev.clone())
        .collect()
}

/// Read every stored event and run it through [`visible_events`].
pub fn load_visible(conn: &Connection, selected: &Category, today: NaiveDate) -> AppResult<Vec<Event>> {
    Ok(visible_events(&list_all(conn)?, selected, today))
}

fn keep(selected: &Category, days_remaining: i64, ev: &Event) -> bool {
    match selected {
        Category::All => true,
        // Past events are kept as well; only the upper bound applies.
        Category::Week => days_remaining <= WEEK_HORIZON_DAYS || ev.group() == WEEK,
        Category::Events => !is_recurring_group(ev.group()),
        Category::Named(name) => ev.group() == name,
    }
}
