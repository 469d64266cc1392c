//! Cloud record store client.
//!
//! Pushes the full local record set to a configured remote endpoint. The
//! push is one-directional and best-effort: a failed upload is reported to
//! the user and changes nothing locally.

use crate::libs::config::CloudConfig;
use crate::libs::expense::Expense;
use crate::libs::session::Session;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Serialize;

const RECORDS_URL: &str = "records";

#[derive(Serialize)]
struct PushPayload<'a> {
    sessions: &'a [Session],
    expenses: &'a [Expense],
}

pub struct CloudClient {
    client: Client,
    config: CloudConfig,
}

impl CloudClient {
    pub fn new(config: &CloudConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Uploads all sessions and expenses, returning the response status.
    pub async fn push(&self, sessions: &[Session], expenses: &[Expense]) -> Result<StatusCode> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), RECORDS_URL);
        let res = self.client.post(url).json(&PushPayload { sessions, expenses }).send().await?;
        Ok(res.status())
    }
}
