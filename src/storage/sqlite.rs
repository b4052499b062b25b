use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::{params, Connection};

use crate::error::TicklistError;

use super::StoragePort;

/// Resolve the data directory: $TICKLIST_HOME if set, else ~/.ticklist.
pub fn data_dir() -> Result<PathBuf, TicklistError> {
    if let Some(home) = env::var_os("TICKLIST_HOME") {
        return Ok(PathBuf::from(home));
    }
    match env::var_os("HOME") {
        Some(home) => Ok(PathBuf::from(home).join(".ticklist")),
        None => Err(TicklistError::storage(
            "Cannot locate data directory: neither TICKLIST_HOME nor HOME is set.",
        )),
    }
}

pub fn db_path() -> Result<PathBuf, TicklistError> {
    Ok(data_dir()?.join("ticklist.db"))
}

/// SQLite-backed key-value store. Opening creates the directory, database,
/// and schema as needed; a fresh store restores as empty state.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open_default() -> Result<Self, TicklistError> {
        Self::open_at(db_path()?)
    }

    pub fn open_at(path: PathBuf) -> Result<Self, TicklistError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TicklistError::storage(e.to_string()))?;
        }
        let conn = Connection::open(&path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )?;
        migrate(&conn)?;
        Ok(Self { conn })
    }
}

fn migrate(conn: &Connection) -> Result<(), TicklistError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

impl StoragePort for SqliteStorage {
    fn load(&self, key: &str) -> Result<Option<String>, TicklistError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), TicklistError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
