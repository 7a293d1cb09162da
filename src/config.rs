use std::path::Path;

use tokio::fs;

use crate::error::{Error, Result};

pub const DEFAULT_MENU_URL: &str = "https://www.studentenwerk-leipzig.de/mensa/menu";

fn default_menu_url() -> String {
    DEFAULT_MENU_URL.to_owned()
}

/// Settings read once from `config.json` at startup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    #[serde(rename = "WebhookPath")]
    webhook_path: String,
    #[serde(rename = "MensaID")]
    mensa_id: String, // ex. 140 for Mensa am Park
    #[serde(rename = "MattermostUsername")]
    username: String,
    #[serde(rename = "MattermostChannel")]
    channel: String,
    #[serde(rename = "MattermostIconURL")]
    icon_url: String,
    #[serde(rename = "MenuURL", default = "default_menu_url")]
    menu_url: String,
}

impl Config {
    pub async fn load(p: impl AsRef<Path>) -> Result<Self> {
        let p = p.as_ref();
        log::debug!("Reading config from {}", p.display());
        let text = fs::read_to_string(p).await?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.webhook_path.trim().is_empty() {
            return Err(Error::config_error("`WebhookPath` must not be empty"));
        }
        if config.mensa_id.trim().is_empty() {
            return Err(Error::config_error("`MensaID` must not be empty"));
        }
        Ok(config)
    }

    pub fn webhook_path(&self) -> &str {
        &self.webhook_path
    }

    pub fn mensa_id(&self) -> &str {
        &self.mensa_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }
}
