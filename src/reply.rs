//! Splits a reply into Discord-sized chunks and delivers them in order
//! against a deferred interaction: the first chunk finalizes the pending
//! response, every later chunk goes out as a follow-up message.

use serenity::{
    async_trait,
    http::Http,
    model::application::interaction::application_command::ApplicationCommandInteraction,
};
use tracing::error;

/// Discord rejects messages longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

const EMPTY_REPLY_FALLBACK: &str = "The AI did not produce any response.";

/// Splits `text` into consecutive chunks of at most `max_len` characters.
/// Every chunk except the last is exactly `max_len` long; empty input yields
/// no chunks at all. The limit counts `char`s, so a code point is never torn
/// across two chunks.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.is_empty() || max_len == 0 {
        return Vec::new();
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for ch in text.chars() {
        current.push(ch);
        current_len += 1;
        if current_len == max_len {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseState {
    Pending,
    Finalized,
}

/// One interaction's outbound message capability. `finalize` resolves the
/// pending response and is valid exactly once; `follow_up` appends further
/// messages and is only valid after finalization.
#[async_trait]
pub trait ReplyChannel {
    fn state(&self) -> ResponseState;

    async fn finalize(&mut self, content: &str) -> serenity::Result<()>;

    async fn follow_up(&mut self, content: &str) -> serenity::Result<()>;
}

/// Production [`ReplyChannel`] over a deferred application command
/// interaction.
pub struct InteractionReply<'a> {
    http: &'a Http,
    interaction: &'a ApplicationCommandInteraction,
    state: ResponseState,
}

impl<'a> InteractionReply<'a> {
    /// Wraps an interaction whose response has been deferred but not yet sent.
    pub fn deferred(http: &'a Http, interaction: &'a ApplicationCommandInteraction) -> Self {
        Self {
            http,
            interaction,
            state: ResponseState::Pending,
        }
    }
}

#[async_trait]
impl ReplyChannel for InteractionReply<'_> {
    fn state(&self) -> ResponseState {
        self.state
    }

    async fn finalize(&mut self, content: &str) -> serenity::Result<()> {
        self.interaction
            .edit_original_interaction_response(self.http, |response| response.content(content))
            .await?;
        self.state = ResponseState::Finalized;
        Ok(())
    }

    async fn follow_up(&mut self, content: &str) -> serenity::Result<()> {
        self.interaction
            .create_followup_message(self.http, |message| message.content(content))
            .await?;
        Ok(())
    }
}

/// Delivers `text` over `channel`, chunking it under the message limit.
///
/// The channel must still have its response pending; otherwise the delivery
/// is dropped with a logged error and the channel is left untouched. Each
/// chunk is fully sent before the next one goes out, and a failed send aborts
/// the rest of the delivery.
pub async fn send_long_reply<C>(channel: &mut C, text: &str) -> serenity::Result<()>
where
    C: ReplyChannel + Send,
{
    if channel.state() != ResponseState::Pending {
        error!("Reply channel has no pending response, dropping the delivery");
        return Ok(());
    }

    let chunks = split_message(text, DISCORD_MESSAGE_LIMIT);
    let Some((first, rest)) = chunks.split_first() else {
        return channel.finalize(EMPTY_REPLY_FALLBACK).await;
    };

    channel.finalize(first).await?;
    for chunk in rest {
        channel.follow_up(chunk).await?;
    }
    Ok(())
}
