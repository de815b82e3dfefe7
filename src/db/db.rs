//! Storage handle: opens the database file and ensures the schema exists.
//!
//! Every repository goes through [`Db::new`], which resolves the database
//! path inside the platform application data directory, opens (or creates)
//! the file and runs the idempotent schema setup. There is no migration
//! system; the `CREATE TABLE IF NOT EXISTS` statements below are the whole
//! schema story and are safe to run on every process start.

use crate::db::error::StoreError;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "tali.db";

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)";
// owner_id stays a declarative relationship. The bundled SQLite is built
// with foreign key enforcement on by default, so ensure_schema switches
// it off for every connection.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    owner_id INTEGER NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    due_date TEXT NOT NULL,
    priority INTEGER NOT NULL,
    status TEXT NOT NULL,
    tags TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    archived INTEGER NOT NULL DEFAULT 0
)";
const SCHEMA_TASKS_OWNER_IDX: &str = "CREATE INDEX IF NOT EXISTS idx_tasks_owner ON tasks(owner_id)";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database, creating the file and the schema if absent.
    ///
    /// Failure to open or to create the schema surfaces as
    /// [`StoreError::Unavailable`].
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        msg_debug!(format!("Opening database at {}", db_file_path.display()));
        let conn = Connection::open(db_file_path).map_err(StoreError::Unavailable)?;
        Self::ensure_schema(&conn)?;

        Ok(Db { conn })
    }

    /// Idempotent schema creation for the `users` and `tasks` tables. Also
    /// switches foreign key enforcement off for this connection, since the
    /// bundled SQLite builds with it on by default.
    fn ensure_schema(conn: &Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", false).map_err(StoreError::Unavailable)?;
        conn.execute(SCHEMA_USERS, []).map_err(StoreError::Unavailable)?;
        conn.execute(SCHEMA_TASKS, []).map_err(StoreError::Unavailable)?;
        conn.execute(SCHEMA_TASKS_OWNER_IDX, []).map_err(StoreError::Unavailable)?;
        Ok(())
    }
}
