//! Login session persisted between command invocations.
//!
//! `tali login` writes a small `session.json` next to the database; every
//! task command loads it back instead of asking the operator who they are.
//! `tali logout` removes the file. The session carries no secret, only the
//! authenticated user's id and name.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
}

impl Session {
    pub fn new(user_id: i32, username: &str) -> Self {
        Session {
            user_id,
            username: username.to_string(),
        }
    }

    /// Persists the session, replacing any previous one.
    pub fn save(&self) -> Result<()> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        let session_file = File::create(session_file_path)?;
        serde_json::to_writer_pretty(&session_file, &self)?;
        Ok(())
    }

    /// Loads the stored session; no file means no session, not an error.
    pub fn load() -> Result<Option<Session>> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;

        if !session_file_path.exists() {
            return Ok(None);
        }

        let session_str = fs::read_to_string(session_file_path)?;
        let session: Session = serde_json::from_str(&session_str)?;
        Ok(Some(session))
    }

    /// Removes the stored session. Clearing an absent session is a no-op.
    pub fn clear() -> Result<()> {
        let session_file_path = DataStorage::new().get_path(SESSION_FILE_NAME)?;

        if session_file_path.exists() {
            fs::remove_file(session_file_path)?;
        }
        Ok(())
    }

    /// Loads the session or fails with the "not logged in" message that the
    /// task commands surface to the operator.
    pub fn require() -> Result<Session> {
        Session::load()?.ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
    }

    /// Ownership guard used by the command layer before mutating a task.
    pub fn owns(&self, task: &Task) -> bool {
        task.owner_id == self.user_id
    }
}
