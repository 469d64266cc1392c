//! Configuration management.
//!
//! Settings are stored as JSON in the platform data directory and cover the
//! report owner name, wage parameters for earnings display, and the
//! optional cloud record store. Fields form a closed, typed set; there is
//! no generic key/value update path.
//!
//! The net wage factor defaults to [`NET_WAGE_FACTOR`] and is kept as a
//! configuration value: it is a flat pay approximation, not a tax model,
//! and is not exposed by the interactive wizard.

use crate::libs::data_storage::DataStorage;
use crate::libs::summary::NET_WAGE_FACTOR;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Remote record store endpoint used by the `sync` command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CloudConfig {
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Report owner name shown in document headers.
    #[serde(default)]
    pub username: String,

    /// Hourly wage; zero suppresses all earnings display.
    #[serde(default)]
    pub hourly_wage: f64,

    /// Flat gross-to-net conversion factor applied to earnings.
    #[serde(default = "default_net_wage_factor")]
    pub net_wage_factor: f64,

    /// Whether earnings are shown alongside worked time.
    #[serde(default = "default_show_earnings")]
    pub show_earnings: bool,

    /// Optional cloud record store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudConfig>,
}

fn default_net_wage_factor() -> f64 {
    NET_WAGE_FACTOR
}

fn default_show_earnings() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            hourly_wage: 0.0,
            net_wage_factor: NET_WAGE_FACTOR,
            show_earnings: true,
            cloud: None,
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn file_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Driver name")
            .default(current.username.clone())
            .allow_empty(true)
            .interact_text()?;

        let hourly_wage: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Hourly wage (0 hides earnings)")
            .default(current.hourly_wage)
            .validate_with(|wage: &f64| -> Result<(), &str> {
                if *wage >= 0.0 {
                    Ok(())
                } else {
                    Err("Hourly wage cannot be negative")
                }
            })
            .interact_text()?;

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Cloud record store URL (empty to disable)")
            .default(current.cloud.as_ref().map(|cloud| cloud.api_url.clone()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let cloud = if api_url.trim().is_empty() {
            None
        } else {
            Some(CloudConfig {
                api_url: api_url.trim().to_string(),
            })
        };

        Ok(Self {
            username,
            hourly_wage,
            cloud,
            ..current
        })
    }
}
