//! One-shot tool that replaces the application's global slash-command set
//! with the single `/chat` command. Run it manually whenever the command
//! schema changes; the bot itself never registers commands.

mod config;

use anyhow::Context as _;
use serenity::{
    builder::CreateApplicationCommandOption,
    http::Http,
    model::application::command::{Command, CommandOptionType},
};
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let http = Http::new_with_application_id(&config.discord_token, config.application_id);

    info!("Refreshing global application commands");

    let message_option = CreateApplicationCommandOption::default()
        .name("message")
        .description("The message to send to the AI")
        .kind(CommandOptionType::String)
        .required(true)
        .to_owned();

    let commands = Command::set_global_application_commands(&http, |commands| {
        commands.create_application_command(|command| {
            command
                .name("chat")
                .description("Chat with the AI")
                .add_option(message_option)
        })
    })
    .await
    .context("Unable to register the chat command")?;

    info!("Registered {} global application command(s)", commands.len());
    Ok(())
}
