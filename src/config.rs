use anyhow::Context as _;
use std::env;

/// Everything the bot reads from its environment. Loaded once at startup;
/// a missing or malformed variable aborts the process before any network I/O.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
    pub groq_api_key: String,
    pub groq_model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN is not set")?;
        let application_id = env::var("DISCORD_APPLICATION_ID")
            .context("DISCORD_APPLICATION_ID is not set")?
            .parse::<u64>()
            .context("DISCORD_APPLICATION_ID is not a valid id")?;
        let groq_api_key = env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY is not set")?;
        let groq_model = env::var("GROQ_MODEL_NAME")
            .context("GROQ_MODEL_NAME is not set")?;

        Ok(Self {
            discord_token,
            application_id,
            groq_api_key,
            groq_model,
        })
    }
}
