use crate::ports::discord::{ChannelId, CreateEmbed, CreateMessage, GuildId, InteractionHook};
use crate::ports::reply::{ReplyChannel, ReplyTarget};
use chrono::{DateTime, Utc};
use domain_shared::discord::{RoleId, UserId};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: UserId,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(UserId),
    Channel(ChannelId),
    Role(RoleId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

/// A slash command invocation as received from the gateway, before it has
/// been matched against the registry.
#[derive(Debug, Clone)]
pub struct IncomingInteraction {
    pub command_name: String,
    pub invoker: Option<Invoker>,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub hook: Option<InteractionHook>,
    pub options: Vec<CommandOption>,
    pub received_at: DateTime<Utc>,
}

impl IncomingInteraction {
    pub fn new(command_name: impl Into<String>, channel_id: ChannelId) -> Self {
        Self {
            command_name: command_name.into(),
            invoker: None,
            channel_id,
            guild_id: None,
            hook: None,
            options: Vec::new(),
            received_at: Utc::now(),
        }
    }

    pub fn invoker(mut self, invoker: Invoker) -> Self {
        self.invoker = Some(invoker);
        self
    }

    pub fn guild(mut self, guild_id: GuildId) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn hook(mut self, hook: InteractionHook) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.push(CommandOption {
            name: name.into(),
            value,
        });
        self
    }

    pub fn reply_target(&self) -> ReplyTarget {
        ReplyTarget {
            channel_id: self.channel_id,
            hook: self.hook.clone(),
        }
    }
}

/// Everything a command handler gets to see about its invocation.
#[derive(Clone)]
pub struct CommandEvent {
    command: String,
    invoker: Invoker,
    channel_id: ChannelId,
    guild_id: GuildId,
    hook: Option<InteractionHook>,
    options: Vec<CommandOption>,
    received_at: DateTime<Utc>,
    reply_channel: Arc<dyn ReplyChannel + Send + Sync>,
}

impl CommandEvent {
    /// Returns `None` when the interaction has no invoker or no guild.
    pub fn from_interaction(
        command: impl Into<String>,
        interaction: IncomingInteraction,
        reply_channel: Arc<dyn ReplyChannel + Send + Sync>,
    ) -> Option<Self> {
        let IncomingInteraction {
            command_name: _,
            invoker,
            channel_id,
            guild_id,
            hook,
            options,
            received_at,
        } = interaction;

        Some(Self {
            command: command.into(),
            invoker: invoker?,
            channel_id,
            guild_id: guild_id?,
            hook,
            options,
            received_at,
            reply_channel,
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    pub fn is_slash_command(&self) -> bool {
        self.hook.is_some()
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.option(name) {
            Some(OptionValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.option(name) {
            Some(OptionValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.option(name) {
            Some(OptionValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn reply_target(&self) -> ReplyTarget {
        ReplyTarget {
            channel_id: self.channel_id,
            hook: self.hook.clone(),
        }
    }

    pub async fn reply(&self, text: impl Into<String>) {
        self.reply_message(CreateMessage::text(text)).await;
    }

    pub async fn reply_embed(&self, embed: CreateEmbed) {
        self.reply_message(CreateMessage::from(embed)).await;
    }

    pub async fn reply_message(&self, message: CreateMessage) {
        self.reply_channel
            .send(message, self.reply_target(), None)
            .await;
    }

    /// Auto deletion only applies when the reply does not go through the
    /// interaction hook.
    pub async fn reply_with_delete_after(&self, message: CreateMessage, delete_after: Duration) {
        self.reply_channel
            .send(message, self.reply_target(), Some(delete_after))
            .await;
    }

    /// Posts in the invoking channel, bypassing the interaction hook.
    pub async fn send_to_channel(&self, message: CreateMessage, delete_after: Option<Duration>) {
        self.reply_channel
            .send(message, ReplyTarget::channel(self.channel_id), delete_after)
            .await;
    }
}

impl fmt::Debug for CommandEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEvent")
            .field("command", &self.command)
            .field("invoker", &self.invoker)
            .field("channel_id", &self.channel_id)
            .field("guild_id", &self.guild_id)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
