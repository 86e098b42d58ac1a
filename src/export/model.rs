// src/export/model.rs

use crate::models::event::Event;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat record written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: String,
    pub date: String,
    pub next_occurrence: String,
    pub days_remaining: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub group: String,
}

impl EventExport {
    pub fn from_event(ev: &Event, today: NaiveDate) -> Self {
        Self {
            id: ev.id().to_string(),
            date: ev.date().format("%Y-%m-%d").to_string(),
            next_occurrence: ev.next_occurrence(today).format("%Y-%m-%d").to_string(),
            days_remaining: ev.days_remaining(today),
            title: ev.title().to_string(),
            description: ev.description().to_string(),
            icon: ev.icon().unwrap_or_default().to_string(),
            group: ev.group().to_string(),
        }
    }
}
