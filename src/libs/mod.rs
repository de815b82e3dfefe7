//! Core library modules for the tali application.
//!
//! Everything below the command layer lives here: the domain model,
//! configuration, session handling, message catalog and console rendering.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tali::db::tasks::Tasks;
//! use tali::libs::task::Task;
//!
//! # fn main() -> anyhow::Result<()> {
//! let task = Task::new(1, "Water the plants", "", "2025-06-01", 1, "home");
//! let mut tasks_db = Tasks::new()?;
//! tasks_db.add(&task)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod session;
pub mod task;
pub mod view;
