//! Database layer for the tali application.
//!
//! A thin persistence layer over SQLite with one module per entity. Each
//! repository opens its own connection through [`db::Db`], which also makes
//! sure the schema exists, so every command starts from a usable store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tali::db::tasks::Tasks;
//! use tali::libs::task::Task;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let id = tasks.add(&Task::new(1, "Buy milk", "2%", "2024-01-01", 2, "errand"))?;
//! # Ok(())
//! # }
//! ```

/// Connection handling and idempotent schema creation.
pub mod db;

/// Typed storage failures callers can branch on.
pub mod error;

/// Task CRUD: create, fetch, partial update, archive, hard delete.
pub mod tasks;

/// User accounts: signup and credential verification.
pub mod users;
