//! Account creation command.

use crate::{
    db::{error::StoreError, users::Users},
    libs::{config::Config, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(required = true)]
    username: String,
}

pub fn cmd(signup_args: SignupArgs) -> Result<()> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .with_confirmation(Message::PromptPasswordConfirm.to_string(), Message::PasswordMismatch.to_string())
        .interact()?;

    let config = Config::read()?;
    let mut users = Users::new()?;

    match users.create(&signup_args.username, &password, config.hash_cost()) {
        Ok(_) => msg_success!(Message::UserCreated(signup_args.username)),
        Err(e) => match e.downcast_ref::<StoreError>() {
            // A taken username is an expected outcome, not a crash
            Some(StoreError::DuplicateUser(_)) => msg_error!(Message::UserAlreadyExists(signup_args.username)),
            _ => return Err(e),
        },
    }

    Ok(())
}
