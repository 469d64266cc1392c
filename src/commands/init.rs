//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for first-time use or later changes:
//! driver name, hourly wage, and the optional cloud record store.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
