mod channel_id;
mod create_embed;
mod create_message;
mod error;
mod guild_id;
mod message;
mod message_id;
mod slash_definition;

use crate::discord::channel_id::domain_to_serenity_channel_id;
use crate::discord::create_message::{
    domain_to_serenity_create_message, domain_to_serenity_followup,
};
use crate::discord::error::{discord_json_error_code, serenity_to_domain_error, UNKNOWN_MESSAGE};
use crate::discord::guild_id::domain_to_serenity_guild_id;
use crate::discord::message::serenity_to_domain_message;
use crate::discord::message_id::domain_to_serenity_message_id;
use crate::discord::slash_definition::domain_to_serenity_create_command;
use ::serenity::all as serenity;
use ::serenity::all::{Builder, Http};
use async_trait::async_trait;
use domain::command::SlashDefinition;
use domain::ports::discord::{
    ChannelId, CreateMessage, DiscordPort, GuildId, InteractionHook, Message, MessageId, Result,
};
use std::sync::Arc;
use tracing::instrument;

pub struct DiscordAdapter {
    client: Arc<Http>,
    bot_user_id: serenity::UserId,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>, bot_user_id: serenity::UserId) -> Self {
        Self {
            client,
            bot_user_id,
        }
    }

    /// Permissions of the bot in a channel. `None` for channels outside of
    /// a guild.
    #[instrument(level = "trace", skip(self))]
    async fn own_permissions(
        &self,
        channel_id: serenity::ChannelId,
    ) -> ::serenity::Result<Option<serenity::Permissions>> {
        let channel = match self.client.get_channel(channel_id).await? {
            serenity::Channel::Guild(channel) => channel,
            _ => return Ok(None),
        };

        let guild = self.client.get_guild(channel.guild_id).await?;
        let member = self
            .client
            .get_member(channel.guild_id, self.bot_user_id)
            .await?;

        Ok(Some(guild.user_permissions_in(&channel, &member)))
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, hook, message))]
    async fn send_followup(
        &self,
        hook: InteractionHook,
        message: CreateMessage,
        ephemeral: bool,
    ) -> Result<()> {
        let followup = domain_to_serenity_followup(message, ephemeral);

        followup
            .execute(self.client.as_ref(), (None, hook.token.as_str()))
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self, message))]
    async fn send_message(&self, channel_id: ChannelId, message: CreateMessage) -> Result<Message> {
        let message = domain_to_serenity_create_message(message);
        let channel_id = domain_to_serenity_channel_id(channel_id);

        let message = message
            .execute(self.client.as_ref(), (channel_id, None))
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(serenity_to_domain_message(&message))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn can_talk(&self, channel_id: ChannelId) -> Result<bool> {
        let channel_id = domain_to_serenity_channel_id(channel_id);

        let permissions = self
            .own_permissions(channel_id)
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(permissions.map_or(true, |permissions| {
            permissions.view_channel() && permissions.send_messages()
        }))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn has_manage_messages(&self, channel_id: ChannelId) -> Result<bool> {
        let channel_id = domain_to_serenity_channel_id(channel_id);

        let permissions = self
            .own_permissions(channel_id)
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(permissions.is_some_and(|permissions| permissions.manage_messages()))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Message>> {
        let channel_id = domain_to_serenity_channel_id(channel_id);
        let message_id = domain_to_serenity_message_id(message_id);

        match self.client.get_message(channel_id, message_id).await {
            Ok(message) => Ok(Some(serenity_to_domain_message(&message))),
            Err(error) if discord_json_error_code(&error) == Some(UNKNOWN_MESSAGE) => Ok(None),
            Err(error) => Err(serenity_to_domain_error(error)),
        }
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()> {
        let channel_id = domain_to_serenity_channel_id(channel_id);
        let message_id = domain_to_serenity_message_id(message_id);

        self.client
            .delete_message(channel_id, message_id, None)
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self, commands))]
    async fn set_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<SlashDefinition>,
    ) -> Result<()> {
        let guild_id = domain_to_serenity_guild_id(guild_id);
        let commands = commands
            .into_iter()
            .map(domain_to_serenity_create_command)
            .collect();

        guild_id
            .set_commands(&self.client, commands)
            .await
            .map_err(serenity_to_domain_error)?;

        Ok(())
    }
}
