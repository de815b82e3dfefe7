pub mod init;
pub mod login;
pub mod logout;
pub mod signup;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a new user account")]
    Signup(signup::SignupArgs),
    #[command(about = "Log in and open a session")]
    Login(login::LoginArgs),
    #[command(about = "Close the current session")]
    Logout,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Signup(args) => signup::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Task(args) => task::cmd(args),
        }
    }
}
