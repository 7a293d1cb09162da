#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod date;
mod error;
mod fetch;
mod parse;
#[cfg(test)]
mod test_server;
mod webhook;

use std::env;

use crate::{config::Config, fetch::make_client, webhook::Message};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config_path = env::var("CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = Config::load(&config_path).await.map_err(|e| {
        log::error!("Could not load config from {config_path}: {e}");
        e
    })?;

    let client = make_client()?;
    let today = chrono::Local::now().date_naive();
    let url = fetch::menu_url(config.menu_url(), today, config.mensa_id())?;
    log::info!("Fetching menu from {url}");
    let daily = fetch::daily_menu(&client, url, config.mensa_id()).await;
    if daily.canteen_name.is_empty() {
        log::warn!("No name found for canteen {}", config.mensa_id());
    }

    let Some(message) = Message::new(&config, today, &daily) else {
        log::info!("No menu for {today}, nothing to send.");
        return Ok(());
    };

    if env::var_os("DRY_RUN").is_some() {
        println!("{}", message.text());
        return Ok(());
    }

    webhook::send(&client, config.webhook_path(), &message).await?;
    log::info!("Menu sent to {}", config.channel());
    Ok(())
}
