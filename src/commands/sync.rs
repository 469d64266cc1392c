//! Push local records to the configured cloud store.
//!
//! The push is best-effort: a failure is reported and local records remain
//! untouched either way.

use crate::api::cloud::CloudClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_error, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(cloud) = config.cloud.as_ref() else {
        msg_error!(Message::CloudNotConfigured);
        return Ok(());
    };

    let store = super::open_store()?;
    let sessions: Vec<Session> = store.all_sessions().into_iter().cloned().collect();

    match CloudClient::new(cloud).push(&sessions, store.expenses()).await {
        Ok(status) if status.is_success() => msg_success!(Message::SyncCompleted(sessions.len())),
        Ok(status) => msg_error!(Message::SyncFailed(status.to_string())),
        Err(err) => msg_error!(Message::SyncFailed(err.to_string())),
    }
    Ok(())
}
