//! Record store: the `events` table keyed by event id.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields};
use crate::models::event_id::EventId;
use crate::utils::date::from_dmy;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Shortest id prefix accepted on the command line.
pub const MIN_ID_PREFIX: usize = 4;

fn conversion_failure(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

pub fn map_row(row: &Row) -> Result<Event> {
    let id_str: String = row.get("id")?;
    let id = EventId::parse(&id_str).map_err(conversion_failure)?;

    let date = from_dmy(row.get("day")?, row.get("month")?, row.get("year")?)
        .map_err(conversion_failure)?;

    Ok(Event::restore(
        id,
        EventFields {
            date,
            title: row.get("title")?,
            description: row.get("description")?,
            icon: row.get("icon_name")?,
            group: row.get("category")?,
        },
    ))
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO events (id, day, month, year, title, description, icon_name, category, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
        params![
            ev.id().to_db_str(),
            ev.day(),
            ev.month(),
            ev.year(),
            ev.title(),
            ev.description(),
            ev.icon(),
            ev.group(),
            now,
        ],
    )?;
    Ok(())
}

/// Update an event in place (all fields except id).
/// Returns the number of rows touched, 0 when the id is unknown.
pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events
         SET day = ?1, month = ?2, year = ?3,
             title = ?4, description = ?5,
             icon_name = ?6, category = ?7,
             updated_at = ?8
         WHERE id = ?9",
        params![
            ev.day(),
            ev.month(),
            ev.year(),
            ev.title(),
            ev.description(),
            ev.icon(),
            ev.group(),
            Local::now().to_rfc3339(),
            ev.id().to_db_str(),
        ],
    )?;
    Ok(n)
}

/// Remove every row carrying `id`. Unknown ids remove nothing.
pub fn delete_event(conn: &Connection, id: &EventId) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", [id.to_db_str()])?;
    Ok(n)
}

/// Full scan in storage order.
pub fn list_all(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare("SELECT * FROM events ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: &EventId) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare("SELECT * FROM events WHERE id = ?1")?;
    let ev = stmt.query_row([id.to_db_str()], map_row).optional()?;
    Ok(ev)
}

pub fn event_exists(conn: &Connection, id: &EventId) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM events WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id.to_db_str()])?)
}

/// Turn a command-line id into an [`EventId`].
///
/// Accepts a full UUID, a legacy decimal id, or an unambiguous prefix of at
/// least [`MIN_ID_PREFIX`] characters of a stored UUID. Digit-only input is
/// always a legacy id and never a prefix. A well-formed id that matches
/// nothing is returned as is, so callers decide what "missing" means.
pub fn resolve_event_id(conn: &Connection, input: &str) -> AppResult<EventId> {
    let input = input.trim();

    if EventId::is_legacy_form(input) {
        return EventId::parse(input);
    }

    let parsed = EventId::parse(input).ok();
    if let Some(id) = parsed
        && event_exists(conn, &id)?
    {
        return Ok(id);
    }

    let prefix = input.to_lowercase();
    let looks_like_prefix = prefix.len() >= MIN_ID_PREFIX
        && prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-');

    if looks_like_prefix {
        let mut stmt =
            conn.prepare("SELECT id FROM events WHERE id LIKE ?1 || '%' ORDER BY rowid ASC")?;
        let ids: Vec<String> = stmt
            .query_map([&prefix], |row| row.get(0))?
            .collect::<Result<_>>()?;

        match ids.len() {
            0 => {}
            1 => return EventId::parse(&ids[0]),
            _ => return Err(AppError::AmbiguousEventId(input.to_string())),
        }
    }

    match parsed {
        Some(id) => Ok(id),
        None if looks_like_prefix => Err(AppError::EventNotFound(input.to_string())),
        None => Err(AppError::InvalidEventId(input.to_string())),
    }
}
