//! User directory: account creation and credential checks.
//!
//! Passwords are hashed with bcrypt before they touch the database; the
//! plaintext is never stored. Verification goes through `bcrypt::verify`,
//! which compares against the salted hash embedded in the stored string.
//!
//! User records are created once and never updated or deleted; there is no
//! API for either.

use crate::db::db::Db;
use crate::db::error::StoreError;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_USER: &str = "INSERT INTO users (username, password_hash) VALUES (?1, ?2)";
const SELECT_USER_BY_NAME: &str = "SELECT id, username, password_hash FROM users WHERE username = ?1";

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Users { conn: db.conn })
    }

    /// Creates a user with a bcrypt hash of `password` at the given cost
    /// factor and returns the new id.
    ///
    /// A UNIQUE violation on the username surfaces as
    /// [`StoreError::DuplicateUser`]; the caller decides how to report it.
    pub fn create(&mut self, username: &str, password: &str, cost: u32) -> Result<i32> {
        let password_hash = bcrypt::hash(password, cost)?;
        match self.conn.execute(INSERT_USER, params![username, password_hash]) {
            Ok(_) => Ok(self.conn.last_insert_rowid() as i32),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
                Err(StoreError::DuplicateUser(username.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Verifies credentials and returns the user id on success.
    ///
    /// Unknown username and wrong password both come back as `Ok(None)`:
    /// indistinguishable on purpose, so the caller cannot enumerate
    /// usernames. A stored hash that bcrypt cannot parse also counts as a
    /// failed match rather than an error.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<Option<i32>> {
        let user = match self.get_by_username(username)? {
            Some(user) => user,
            None => return Ok(None),
        };

        match bcrypt::verify(password, &user.password_hash) {
            Ok(true) => Ok(Some(user.id)),
            _ => Ok(None),
        }
    }

    pub fn get_by_username(&mut self, username: &str) -> Result<Option<UserRecord>> {
        self.conn
            .query_row(SELECT_USER_BY_NAME, params![username], |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
