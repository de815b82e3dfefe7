//! Logout command: drop the saved session.

use crate::{libs::messages::Message, libs::session::Session, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Session::clear()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
