//! Login command: authenticate, open a session and show the active tasks.

use crate::{
    db::{tasks::Tasks, users::Users},
    libs::{config::Config, messages::Message, session::Session, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(required = true)]
    username: String,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let mut users = Users::new()?;
    match users.authenticate(&login_args.username, &password)? {
        Some(user_id) => {
            Session::new(user_id, &login_args.username).save()?;
            msg_success!(Message::LoginSuccessful(login_args.username));

            let tasks = Tasks::new()?.fetch(user_id, false)?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
            } else {
                msg_print!(Message::TasksHeader, true);
                View::tasks(&tasks, Config::read()?.show_tags())?;
            }
        }
        // One message for both unknown username and wrong password
        None => msg_error!(Message::InvalidCredentials),
    }

    Ok(())
}
