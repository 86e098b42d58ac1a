use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::event_id::EventId;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the event with `id`. Returns the removed event, or `None` when
    /// nothing was stored under that id (not an error).
    pub fn apply(pool: &DbPool, id: EventId) -> AppResult<Option<Event>> {
        let existing = load_event(&pool.conn, &id)?;
        let removed = delete_event(&pool.conn, &id)?;

        if removed == 0 {
            return Ok(None);
        }

        let title = existing.as_ref().map(Event::title).unwrap_or_default();
        ttlog_quiet(&pool.conn, "del", &id.to_string(), &format!("Deleted '{title}'"));

        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::add::AddLogic;
    use crate::db::queries::list_all;
    use crate::models::event::EventFields;
    use chrono::NaiveDate;

    fn add(pool: &DbPool, title: &str) -> Event {
        AddLogic::apply(
            pool,
            &Config::default().catalog(),
            EventFields {
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                title: title.into(),
                description: String::new(),
                icon: None,
                group: "work".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn deletes_only_the_requested_event() {
        let pool = DbPool::in_memory().unwrap();
        let a = add(&pool, "a");
        let b = add(&pool, "b");

        let removed = DeleteLogic::apply(&pool, a.id()).unwrap();
        assert_eq!(removed, Some(a));
        assert_eq!(list_all(&pool.conn).unwrap(), vec![b]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let pool = DbPool::in_memory().unwrap();
        let a = add(&pool, "a");

        assert_eq!(DeleteLogic::apply(&pool, EventId::generate()).unwrap(), None);
        assert_eq!(list_all(&pool.conn).unwrap(), vec![a]);
    }
}
