use chrono::NaiveDate;
use reqwest::Client;
use tracing::{instrument, Level};

use crate::{config::Config, date::german_date, fetch::DailyMenu};

/// Payload of a Mattermost incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Message {
    text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    channel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    icon_url: String,
}

impl Message {
    /// Returns `None` if there is no menu to post.
    pub fn new(config: &Config, date: NaiveDate, daily: &DailyMenu) -> Option<Self> {
        if daily.menu.is_empty() {
            return None;
        }
        Some(Self {
            text: format!(
                "Speiseplan am {} ({})\n{}",
                german_date(date),
                daily.canteen_name,
                daily.menu
            ),
            channel: config.channel().to_owned(),
            username: config.username().to_owned(),
            icon_url: config.icon_url().to_owned(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[instrument(skip(client, webhook_url, message), level = Level::TRACE)]
pub async fn send(client: &Client, webhook_url: &str, message: &Message) -> crate::Result<()> {
    client
        .post(webhook_url)
        .json(message)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
