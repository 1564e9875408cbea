use async_trait::async_trait;
use domain::interaction::IncomingInteraction;
use domain::ports::discord::DiscordError;
use domain_shared::discord::GuildId;
use thiserror::Error;

#[async_trait]
pub trait CommandDispatchPort {
    /// Returns `true` when a command was found and its handler started.
    /// The handler itself is not awaited.
    async fn dispatch(&self, interaction: IncomingInteraction) -> bool;

    /// Uploads the slash command definitions to a guild that became ready.
    async fn register_guild_commands(&self, guild_id: GuildId)
        -> Result<(), CommandDispatchError>;
}

#[derive(Debug, Error)]
pub enum CommandDispatchError {
    #[error("Discord rejected the command definitions: {0}")]
    Discord(#[from] DiscordError),
}
