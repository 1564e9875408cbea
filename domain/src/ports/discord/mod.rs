mod create_embed;
mod create_message;
mod message;

use crate::command::SlashDefinition;
use async_trait::async_trait;
pub use create_embed::{CreateEmbed, EmbedField};
pub use create_message::CreateMessage;
pub use domain_shared::discord::{ChannelId, GuildId, MessageId, UserId};
pub use message::{InteractionHook, Message, MessageKind};
use thiserror::Error;

pub type Result<T, E = DiscordError> = std::result::Result<T, E>;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    async fn send_followup(
        &self,
        hook: InteractionHook,
        message: CreateMessage,
        ephemeral: bool,
    ) -> Result<()>;

    async fn send_message(&self, channel_id: ChannelId, message: CreateMessage) -> Result<Message>;

    /// Whether the bot may post in the channel.
    async fn can_talk(&self, channel_id: ChannelId) -> Result<bool>;

    async fn has_manage_messages(&self, channel_id: ChannelId) -> Result<bool>;

    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Message>>;

    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()>;

    async fn set_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<SlashDefinition>,
    ) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Unknown message")]
    UnknownMessage,
    #[error("Unknown interaction")]
    UnknownInteraction,
    #[error("Missing permissions")]
    MissingPermissions,
    #[error("Discord is unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl DiscordError {
    /// The target of the request was deleted before it reached Discord.
    pub fn is_vanished_target(&self) -> bool {
        matches!(
            self,
            DiscordError::UnknownMessage | DiscordError::UnknownInteraction
        )
    }
}
