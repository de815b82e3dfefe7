//! Task repository: create, fetch, merge-edit, archive and delete.
//!
//! Tasks belong to exactly one user through `owner_id`. Free-text fields
//! (`due_date`, `tags`, `status`) are stored and returned verbatim; the
//! repository neither parses nor validates them. `archived` is a one-way
//! latch: the archive operation sets it and nothing ever clears it.
//!
//! Timestamps are local time at second precision, stored as TEXT. Ownership
//! is not checked here; the command layer decides who may touch which task.

use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::libs::task::{Task, TaskUpdate, STATUS_PENDING};
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_TASK: &str =
    "INSERT INTO tasks (owner_id, title, description, due_date, priority, status, tags, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_TASK_BY_ID: &str =
    "SELECT id, owner_id, title, description, due_date, priority, status, tags, created_at, updated_at, archived FROM tasks WHERE id = ?1";
const SELECT_TASKS_BY_OWNER: &str =
    "SELECT id, owner_id, title, description, due_date, priority, status, tags, created_at, updated_at, archived FROM tasks WHERE owner_id = ?1 AND archived = ?2 ORDER BY id";
const UPDATE_TASK: &str =
    "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5, tags = ?6, updated_at = ?7 WHERE id = ?1";
const ARCHIVE_TASK: &str = "UPDATE tasks SET archived = 1 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task and returns its id.
    ///
    /// The stored row always starts with `status = "Pending"`, `archived`
    /// unset and `created_at = updated_at = now`, regardless of what the
    /// passed struct carries for those fields.
    pub fn add(&mut self, task: &Task) -> Result<i32> {
        let now = now();
        self.conn.execute(
            INSERT_TASK,
            params![task.owner_id, task.title, task.description, task.due_date, task.priority, STATUS_PENDING, task.tags, now, now],
        )?;
        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Fetches a single task; a missing id is `None`, not an error.
    pub fn get(&mut self, task_id: i32) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![task_id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Returns the owner's tasks whose archived flag matches exactly, in
    /// insertion (id) order. There is no "both" mode: active and archived
    /// listings partition the owner's tasks.
    pub fn fetch(&mut self, owner_id: i32, archived: bool) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_OWNER)?;
        let task_iter = stmt.query_map(params![owner_id, archived], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Applies a partial update on top of the stored row and writes the
    /// merged task back, returning it.
    ///
    /// `None` fields keep their stored value; `Some(v)` sets `v` even when
    /// it is empty or zero. `updated_at` is refreshed on every call, also
    /// for an all-`None` update. Fails with [`StoreError::TaskNotFound`]
    /// when the id does not exist.
    ///
    /// The fetch and the write are two separate statements with no
    /// transaction around them; a concurrent edit or delete in between can
    /// be lost or resurrect the row.
    pub fn edit(&mut self, task_id: i32, update: &TaskUpdate) -> Result<Task> {
        let mut task = self.get(task_id)?.ok_or(StoreError::TaskNotFound(task_id))?;
        update.apply(&mut task);
        task.updated_at = Some(now());
        self.conn.execute(
            UPDATE_TASK,
            params![task_id, task.title, task.description, task.due_date, task.priority, task.tags, task.updated_at],
        )?;
        Ok(task)
    }

    /// Sets the archived flag. Archiving an already-archived task is a
    /// no-op success; a missing id fails with [`StoreError::TaskNotFound`].
    pub fn archive(&mut self, task_id: i32) -> Result<()> {
        let affected = self.conn.execute(ARCHIVE_TASK, params![task_id])?;
        if affected == 0 {
            return Err(StoreError::TaskNotFound(task_id).into());
        }
        Ok(())
    }

    /// Hard delete, independent of the archived flag. Returns the number of
    /// rows removed; deleting a missing id is `Ok(0)`, never an error.
    pub fn delete(&mut self, task_id: i32) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![task_id])?;
        Ok(affected)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            due_date: row.get(4)?,
            priority: row.get(5)?,
            status: row.get(6)?,
            tags: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
            archived: row.get(10)?,
        })
    }
}

/// Local timestamp at second precision, the storage format for
/// `created_at` and `updated_at`.
fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
