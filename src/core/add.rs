use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::AppResult;
use crate::models::catalog::Catalog;
use crate::models::event::{Event, EventFields};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `fields`, store them under a fresh id and return the event.
    pub fn apply(pool: &DbPool, catalog: &Catalog, fields: EventFields) -> AppResult<Event> {
        let event = Event::new(fields, catalog)?;
        insert_event(&pool.conn, &event)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &event.id().to_string(),
            &format!("Added '{}' on {} ({})", event.title(), event.date(), event.group()),
        );

        Ok(event)
    }
}
