use chrono::NaiveDate;
use reqwest::{Client, Error as RequestError};
use scraper::Html;
use tracing::{instrument, Level};
use url::Url;

use crate::date::link_date;
use crate::parse::{extract_canteen_name, extract_menu};

pub fn make_client() -> Result<Client, RequestError> {
    Client::builder().gzip(true).build()
}

/// `base?date=YYYY-MM-DD&location=<mensa_id>`
pub fn menu_url(base: &str, date: NaiveDate, mensa_id: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("date", &link_date(date))
        .append_pair("location", mensa_id);
    Ok(url)
}

async fn fetch_page(client: &Client, url: Url) -> Result<String, RequestError> {
    let res = client.get(url).send().await?.error_for_status()?;
    let start = std::time::Instant::now();
    let text = res.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

/// Fetches and parses one page. Failures are logged and give `None`.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn load_page(client: &Client, url: Url) -> Option<Html> {
    match fetch_page(client, url).await {
        Ok(text) => Some(Html::parse_document(&text)),
        Err(e) => {
            log::warn!("Could not fetch menu page: {e}");
            None
        }
    }
}

/// Everything taken from one menu page. Both fields are empty when the page
/// could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyMenu {
    pub canteen_name: String,
    pub menu: String,
}

impl DailyMenu {
    pub fn from_page(page: &Html, mensa_id: &str) -> Self {
        Self {
            canteen_name: extract_canteen_name(page, mensa_id),
            menu: extract_menu(page),
        }
    }
}

/// Loads the menu page once and runs both extractors over it.
pub async fn daily_menu(client: &Client, url: Url, mensa_id: &str) -> DailyMenu {
    load_page(client, url)
        .await
        .map(|page| DailyMenu::from_page(&page, mensa_id))
        .unwrap_or_default()
}
