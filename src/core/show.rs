//! Detail view of a single event.

use crate::models::event::Event;
use crate::utils::date::format_dmy;
use crate::utils::formatting::{DETAIL_WIDTH, wrap};
use chrono::NaiveDate;

/// Render the detail view: date, wrapped title and description, then the
/// bookkeeping fields.
pub fn render_detail(ev: &Event, today: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(&format!("Date:\n{}\n", format_dmy(ev.date())));
    if ev.is_recurring() {
        out.push_str(&format!(
            "Next: {} ({} days)\n",
            format_dmy(ev.next_occurrence(today)),
            ev.days_remaining(today)
        ));
    } else {
        out.push_str(&format!("Days remaining: {}\n", ev.days_remaining(today)));
    }
    out.push_str(&format!("Title:\n{}\n", wrap(ev.title(), DETAIL_WIDTH)));
    out.push_str(&format!(
        "Description:\n{}\n",
        wrap(ev.description(), DETAIL_WIDTH)
    ));
    out.push_str("\nOther info\n");
    out.push_str(&format!("ID: {}\n", ev.id()));
    out.push_str(&format!("Group: {}\n", ev.group()));
    out.push_str(&format!("Icon: {}", ev.icon().unwrap_or("None")));

    out
}
