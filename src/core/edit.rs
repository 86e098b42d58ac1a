use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_event, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::event::{Event, EventFields};
use crate::models::event_id::EventId;
use chrono::NaiveDate;

/// Field changes requested by `edit`; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EventChanges {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` removes the icon.
    pub icon: Option<Option<String>>,
    pub group: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.group.is_none()
    }

    fn apply_to(self, mut fields: EventFields) -> EventFields {
        if let Some(d) = self.date {
            fields.date = d;
        }
        if let Some(t) = self.title {
            fields.title = t;
        }
        if let Some(d) = self.description {
            fields.description = d;
        }
        if let Some(i) = self.icon {
            fields.icon = i;
        }
        if let Some(g) = self.group {
            fields.group = g;
        }
        fields
    }
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Update the event in place. The id is kept.
    pub fn apply(
        pool: &DbPool,
        catalog: &Catalog,
        id: EventId,
        changes: EventChanges,
    ) -> AppResult<Event> {
        let current =
            load_event(&pool.conn, &id)?.ok_or_else(|| AppError::EventNotFound(id.to_string()))?;

        // Only the fields being changed have to be in the catalog.
        if let Some(group) = &changes.group {
            catalog.check_group(group)?;
        }
        if let Some(icon) = &changes.icon {
            catalog.check_icon(icon.as_deref())?;
        }

        let updated = current.updated(changes.apply_to(current.fields()))?;
        if update_event(&pool.conn, &updated)? == 0 {
            return Err(AppError::EventNotFound(id.to_string()));
        }

        ttlog_quiet(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("Edited '{}' on {}", updated.title(), updated.date()),
        );

        Ok(updated)
    }
}
