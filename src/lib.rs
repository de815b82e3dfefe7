//! # Tali - Terminal Task List
//!
//! A command-line task tracker with per-user accounts, backed by a local
//! SQLite store.
//!
//! ## Features
//!
//! - **Accounts**: Sign up and log in with bcrypt-hashed credentials
//! - **Sessions**: Log in once, run task commands without re-identifying
//! - **Task Management**: Create, list, edit, archive and delete tasks
//! - **Priority Filter**: Show only the tasks at an exact priority level
//! - **Tag Strings**: Free-form comma-separated tags stored verbatim
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tali::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
