//! Configuration management for the tali application.
//!
//! Settings live in a pretty-printed `config.json` inside the platform
//! application data directory and are grouped into optional modules, so a
//! fresh install works with no file at all. `Config::init` drives the
//! interactive setup wizard behind `tali init`.
//!
//! ## Modules
//!
//! - **Auth**: bcrypt cost factor used when hashing signup passwords
//! - **View**: extra columns for the task tables
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\tali\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/tali/config.json`
//! - **Linux**: `~/.local/share/lacodda/tali/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Credential hashing settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuthConfig {
    /// bcrypt cost factor for new signups. Verification reads the cost from
    /// the stored hash, so changing this never locks out existing users.
    pub hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Task table rendering settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ViewConfig {
    /// Adds a TAGS column to the task tables.
    pub show_tags: bool,
}

/// Root configuration object. Unconfigured modules stay `None` and are
/// omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when no file
    /// exists. A file that exists but cannot be parsed is an error, never a
    /// silent default.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        match serde_json::from_str(&config_str) {
            Ok(config) => Ok(config),
            Err(_) => msg_bail_anyhow!(Message::ConfigParseFailed),
        }
    }

    /// Writes the configuration as pretty JSON, overwriting any existing
    /// file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard: pick modules, fill in their settings with
    /// the current values as defaults, return the updated configuration for
    /// saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "auth".to_string(),
                name: "Auth".to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: "View".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "auth" => {
                    let default = config.auth.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAuth);
                    let range_msg = Message::HashCostRange.to_string();
                    config.auth = Some(AuthConfig {
                        hash_cost: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHashCost.to_string())
                            .default(default.hash_cost)
                            .validate_with(|cost: &u32| -> Result<(), &str> {
                                // bcrypt only accepts costs in 4..=31
                                if (4..=31).contains(cost) {
                                    Ok(())
                                } else {
                                    Err(&range_msg)
                                }
                            })
                            .interact_text()?,
                    });
                }
                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        show_tags: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowTags.to_string())
                            .default(default.show_tags)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Effective bcrypt cost: the configured value or the crate default.
    pub fn hash_cost(&self) -> u32 {
        self.auth.as_ref().map(|auth| auth.hash_cost).unwrap_or(bcrypt::DEFAULT_COST)
    }

    /// Whether task tables get the TAGS column.
    pub fn show_tags(&self) -> bool {
        self.view.as_ref().map(|view| view.show_tags).unwrap_or(false)
    }
}
