//! Typed failure kinds for the storage layer.
//!
//! Repository methods return `anyhow::Result` like the rest of the crate, but
//! the failures a caller may want to branch on are wrapped in `StoreError` so
//! they can be recovered with `downcast_ref::<StoreError>()`. Everything else
//! (malformed SQL, I/O faults mid-statement) propagates as a plain error.
//!
//! Authentication failure is deliberately not an error kind: a bad username
//! and a bad password are both reported as `None` by `Users::authenticate`,
//! so the two cases stay indistinguishable to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A signup attempted to reuse a username; uniqueness is enforced by the
    /// UNIQUE constraint on `users.username`.
    #[error("user '{0}' already exists")]
    DuplicateUser(String),

    /// An operation that requires the task to exist (edit, archive) targeted
    /// a missing id. Hard delete is exempt: deleting a missing id is a no-op.
    #[error("task with id {0} not found")]
    TaskNotFound(i32),

    /// The backing store could not be opened or its schema could not be
    /// created. Fatal for the current command.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),
}
