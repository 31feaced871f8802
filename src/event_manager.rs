use serenity::{
    async_trait,
    client::{Context, EventHandler},
    model::{
        application::interaction::{
            application_command::ApplicationCommandInteraction, Interaction,
        },
        gateway::Ready,
        prelude::application_command::CommandDataOptionValue,
    },
};
use tracing::{error, info};

use crate::groq::{ChatMessage, GroqClient};
use crate::reply::{self, InteractionReply};

const COMPLETION_FALLBACK: &str = "Sorry, I could not generate a response.";
const ERROR_REPLY: &str = "Oops! Something went wrong while talking to the AI.";

pub struct Handler {
    groq: GroqClient,
}

impl Handler {
    pub fn new(groq: GroqClient) -> Self {
        Self { groq }
    }

    fn message_option(command: &ApplicationCommandInteraction) -> Option<&str> {
        let option = command
            .data
            .options
            .iter()
            .find(|option| option.name == "message")?;
        match &option.resolved {
            Some(CommandDataOptionValue::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub async fn resolve_interaction(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            match command.data.name.as_str() {
                "chat" => self.chat(ctx, command).await,
                _ => {}
            }
        }
    }

    async fn chat(&self, ctx: Context, command: ApplicationCommandInteraction) {
        info!("Chat command from: {}", command.user.name);

        // Defer right away so Discord does not time the interaction out
        // while the completion is running.
        if let Err(why) = command.defer(&ctx.http).await {
            error!("Failed to defer the chat interaction: {why}");
            return;
        }

        let Some(message) = Self::message_option(&command) else {
            error!("Chat command is missing its required \"message\" option");
            return;
        };

        if let Err(why) = self.respond(&ctx, &command, message).await {
            error!("Chat interaction failed: {why:#}");
            let notice = command
                .edit_original_interaction_response(&ctx.http, |response| {
                    response.content(ERROR_REPLY)
                })
                .await;
            if let Err(why) = notice {
                error!("Failed to deliver the error notice: {why}");
            }
        }
    }

    async fn respond(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        message: &str,
    ) -> anyhow::Result<()> {
        let conversation = [ChatMessage::user(message)];
        let completion = self.groq.complete(&conversation).await?;
        let text = completion.unwrap_or_else(|| COMPLETION_FALLBACK.to_owned());

        let mut channel = InteractionReply::deferred(&ctx.http, command);
        reply::send_long_reply(&mut channel, &text).await?;
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Connected as {}", ready.user.tag());
        info!("Using Groq model: {}", self.groq.model());
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        self.resolve_interaction(ctx, interaction).await
    }
}
