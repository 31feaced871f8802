mod config;
mod event_manager;
mod groq;
mod reply;

use anyhow::Context as _;
use serenity::prelude::*;
use tracing::error;

use crate::config::Config;
use crate::event_manager::Handler;
use crate::groq::GroqClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let groq = GroqClient::new(&config).context("Error creating the Groq client")?;

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(Handler::new(groq))
        .await
        .context("Error creating client")?;

    if let Err(why) = client.start().await {
        error!("An error occurred while running the client: {why:?}");
    }

    Ok(())
}
