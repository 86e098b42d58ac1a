use crate::db::log::ttlog;
use crate::db::queries::{event_exists, insert_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields};
use crate::models::event_id::EventId;
use crate::ui::messages::{success, warning};
use crate::utils::date::from_dmy;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result};
use std::path::PathBuf;

/// Marker written into `log` once the legacy `dates` table has been imported.
const LEGACY_IMPORT_VERSION: &str = "20250301_0001_import_legacy_dates";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `events` table.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           TEXT PRIMARY KEY NOT NULL,
            day          INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            month        INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            year         INTEGER NOT NULL,
            title        TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            icon_name    TEXT,
            category     TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_category ON events(category);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// File backing the main database, `None` for in-memory databases.
fn database_path(conn: &Connection) -> Option<PathBuf> {
    let path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get(2))
        .unwrap_or_default();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn backup_before_migration(db_path: &std::path::Path) -> AppResult<PathBuf> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_legacy_import.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let backup_path = db_path
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| PathBuf::from(&backup_name));

    let zip_err = |stage: &str, e: zip::result::ZipError| {
        AppError::Migration(format!("Backup failed ({stage}): {e}"))
    };

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| zip_err("start_file", e))?;
    let db_content = fs::read(db_path)?;
    zip.write_all(&db_content)?;
    zip.finish().map_err(|e| zip_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(backup_path)
}

/// Decode the id column of the legacy table. The desktop app wrote the
/// decimal form of a UUID into an INTEGER column, so SQLite may hand it back
/// as an integer, a real or text.
fn legacy_id(value: &Value) -> Option<EventId> {
    match value {
        Value::Integer(i) if *i >= 0 => EventId::parse(&i.to_string()).ok(),
        Value::Real(f) if *f >= 0.0 => EventId::parse(&format!("{f:.0}")).ok(),
        Value::Text(s) => EventId::parse(s).ok(),
        _ => None,
    }
}

fn legacy_icon(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim_end().to_string())
        .filter(|s| !s.is_empty() && s != "None")
}

struct LegacyRow {
    day: i64,
    month: i64,
    year: i64,
    title: String,
    description: String,
    icon: Option<String>,
    id: Value,
    group: String,
}

/// Copy the rows of the desktop application's `dates` table into `events`,
/// then drop it. Returns the number of imported events.
fn import_legacy_dates_table(conn: &Connection) -> AppResult<usize> {
    let rows: Vec<LegacyRow> = {
        let mut stmt = conn.prepare(
            "SELECT day, mounth, year, title, description, icon_name, id, date_group
             FROM dates ORDER BY rowid ASC",
        )?;
        let mapped = stmt.query_map([], |row| {
            Ok(LegacyRow {
                day: row.get(0)?,
                month: row.get(1)?,
                year: row.get(2)?,
                title: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                icon: row.get(5)?,
                id: row.get(6)?,
                group: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
            })
        })?;
        mapped.collect::<Result<_>>()?
    };

    let tx = conn.unchecked_transaction()?;
    let mut imported = 0;

    for r in rows {
        let date = match (u32::try_from(r.day), u32::try_from(r.month), i32::try_from(r.year)) {
            (Ok(d), Ok(m), Ok(y)) => from_dmy(d, m, y),
            _ => Err(AppError::InvalidDate(format!("{}.{}.{}", r.day, r.month, r.year))),
        };
        let date = match date {
            Ok(d) => d,
            Err(e) => {
                warning(format!("Skipping legacy event '{}': {e}", r.title));
                continue;
            }
        };

        let id = match legacy_id(&r.id) {
            Some(id) if !event_exists(&tx, &id)? => id,
            _ => EventId::generate(),
        };

        let event = Event::restore(
            id,
            EventFields {
                date,
                title: r.title,
                description: r.description,
                icon: legacy_icon(r.icon),
                group: r.group,
            },
        );
        insert_event(&tx, &event)?;
        imported += 1;
    }

    tx.execute_batch("DROP TABLE dates;")?;
    ttlog(
        &tx,
        "migration_applied",
        LEGACY_IMPORT_VERSION,
        &format!("Imported {imported} events from legacy dates table"),
    )?;
    tx.commit()?;

    Ok(imported)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create events table if missing
    if !table_exists(conn, "events")? {
        create_events_table(conn)?;
        success("Created events table.");
    }

    // 3) Legacy `dates` table from the desktop application
    if table_exists(conn, "dates")? {
        if migration_applied(conn, LEGACY_IMPORT_VERSION)? {
            warning("Legacy dates table found again after import; leaving it untouched.");
            return Ok(());
        }

        warning("Legacy dates table detected — creating safety backup before migration...");
        match database_path(conn) {
            Some(path) => {
                backup_before_migration(&path)?;
            }
            None => warning("Could not determine DB path — backup skipped."),
        }

        let imported = import_legacy_dates_table(conn)?;
        success(format!(
            "Migration applied: {LEGACY_IMPORT_VERSION} → imported {imported} legacy events"
        ));
    }

    Ok(())
}
