use super::catalog::Catalog;
use super::category::is_recurring_group;
use super::event_id::EventId;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{anniversary, days_between};
use chrono::{Datelike, NaiveDate};

/// User-editable part of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub group: String,
}

impl EventFields {
    /// Validate the fields against the configured catalog.
    pub fn validate(&self, catalog: &Catalog) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }
        catalog.check_group(&self.group)?;
        catalog.check_icon(self.icon.as_deref())?;
        Ok(())
    }
}

/// One stored calendar entry.
///
/// Immutable once built: edits go through [`Event::updated`], which keeps the
/// id and returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    date: NaiveDate,   // ⇔ events.day / month / year
    title: String,     // ⇔ events.title
    description: String,
    icon: Option<String>, // ⇔ events.icon_name (NULL = no icon)
    group: String,     // ⇔ events.category
}

impl Event {
    /// Create a brand new event with a fresh id.
    pub fn new(fields: EventFields, catalog: &Catalog) -> AppResult<Self> {
        Self::with_id(EventId::generate(), fields, catalog)
    }

    pub fn with_id(id: EventId, fields: EventFields, catalog: &Catalog) -> AppResult<Self> {
        fields.validate(catalog)?;
        Ok(Self::restore(id, fields))
    }

    /// Rebuild an event read back from storage. The catalog is not consulted
    /// because it may have changed since the row was written.
    pub fn restore(id: EventId, fields: EventFields) -> Self {
        Self {
            id,
            date: fields.date,
            title: fields.title.trim().to_string(),
            description: fields.description,
            icon: fields.icon,
            group: fields.group,
        }
    }

    /// Same identity, new field values.
    ///
    /// Only the title is checked here: a stored row may carry a group or an
    /// icon the catalog no longer lists, so callers check the catalog for the
    /// fields they actually change.
    pub fn updated(&self, fields: EventFields) -> AppResult<Self> {
        if fields.title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }
        Ok(Self::restore(self.id, fields))
    }

    pub fn fields(&self) -> EventFields {
        EventFields {
            date: self.date,
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            group: self.group.clone(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn day(&self) -> u32 {
        self.date.day()
    }
    pub fn month(&self) -> u32 {
        self.date.month()
    }
    pub fn year(&self) -> i32 {
        self.date.year()
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn is_recurring(&self) -> bool {
        is_recurring_group(&self.group)
    }

    /// The date the event falls on next, seen from `today`.
    ///
    /// Recurring events take this year's anniversary unless it is strictly
    /// before `today`, in which case next year's is used. Every other event
    /// keeps its stored date, even when it lies in the past.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        if !self.is_recurring() {
            return self.date;
        }

        let this_year = anniversary(self.date, today.year());
        if days_between(today, this_year) <= -1 {
            anniversary(self.date, today.year() + 1)
        } else {
            this_year
        }
    }

    /// Signed days from `today` to the next occurrence.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_between(today, self.next_occurrence(today))
    }

    /// `"<days> (days). <title>"`
    pub fn summary(&self, today: NaiveDate) -> String {
        format!("{} (days). {}", self.days_remaining(today), self.title)
    }
}
