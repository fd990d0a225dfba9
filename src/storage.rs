//! SQLite persistence for tasks.
//!
//! `Storage` owns a single connection and the `tasks` schema. Every statement
//! runs in SQLite autocommit mode, so each call is committed on its own.

use crate::error::{Result, TaskError};
use rusqlite::types::{FromSql, Value, ValueRef};
use rusqlite::{Connection, ToSql};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Default database file name, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "todo.db";

const CREATE_TASKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    priority TEXT NOT NULL,
    done BOOLEAN NOT NULL
)";

/// Statement access needed by the task layer
pub trait Store {
    /// Open the backing database and make sure the schema exists
    fn connect(&mut self) -> Result<()>;

    /// Run one mutating statement
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Outcome>;

    /// Run one query and collect every row
    fn fetchall(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Record>>;
}

/// Result of a mutating statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub rows_affected: usize,
    pub last_insert_id: i64,
}

/// One fetched row, addressable by column name
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Record { columns }
    }

    /// Raw value of a column
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Decode a column into a Rust type
    pub fn get<T: FromSql>(&self, column: &str) -> Result<T> {
        let value = self
            .value(column)
            .ok_or_else(|| TaskError::MissingColumn(column.to_string()))?;
        T::column_result(ValueRef::from(value))
            .map_err(|e| TaskError::InvalidData(format!("column `{column}`: {e}")))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

/// Database handle
pub struct Storage {
    location: Location,
    conn: Option<Connection>,
}

impl Storage {
    /// Storage backed by a file; nothing is opened until `connect`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Storage {
            location: Location::File(path.as_ref().to_path_buf()),
            conn: None,
        }
    }

    /// Storage backed by a private in-memory database
    pub fn in_memory() -> Self {
        Storage {
            location: Location::Memory,
            conn: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the connection; calling it again is a no-op
    pub fn close(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!(location = ?self.location, "storage closed");
                Ok(())
            }
            Err((conn, e)) => {
                error!(location = ?self.location, error = %e, "failed to close storage");
                self.conn = Some(conn);
                Err(e.into())
            }
        }
    }

    fn open_connection(&self) -> rusqlite::Result<Connection> {
        let conn = match &self.location {
            Location::File(path) => Connection::open(path)?,
            Location::Memory => Connection::open_in_memory()?,
        };
        conn.execute(CREATE_TASKS_TABLE, [])?;
        Ok(conn)
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(TaskError::NotConnected)
    }
}

impl Store for Storage {
    fn connect(&mut self) -> Result<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        match self.open_connection() {
            Ok(conn) => {
                info!(location = ?self.location, "storage connected");
                self.conn = Some(conn);
                Ok(())
            }
            Err(e) => {
                error!(location = ?self.location, error = %e, "failed to open storage");
                Err(e.into())
            }
        }
    }

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Outcome> {
        let conn = self.conn()?;
        debug!(sql, "execute");

        match conn.execute(sql, params) {
            Ok(rows_affected) => Ok(Outcome {
                rows_affected,
                last_insert_id: conn.last_insert_rowid(),
            }),
            Err(e) => {
                error!(sql, error = %e, "statement failed");
                Err(e.into())
            }
        }
    }

    fn fetchall(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Record>> {
        let conn = self.conn()?;
        debug!(sql, "fetchall");

        query_records(conn, sql, params).map_err(|e| {
            error!(sql, error = %e, "query failed");
            TaskError::from(e)
        })
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

fn query_records(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> rusqlite::Result<Vec<Record>> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let rows = stmt.query_map(params, |row| {
        let mut columns = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            columns.push((name.clone(), row.get::<_, Value>(idx)?));
        }
        Ok(Record::new(columns))
    })?;

    rows.collect()
}
