use crate::ports::discord::{ChannelId, CreateMessage, InteractionHook, Message};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTarget {
    pub channel_id: ChannelId,
    pub hook: Option<InteractionHook>,
}

impl ReplyTarget {
    pub fn channel(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            hook: None,
        }
    }

    pub fn hook(channel_id: ChannelId, hook: InteractionHook) -> Self {
        Self {
            channel_id,
            hook: Some(hook),
        }
    }
}

/// Outbound side of a command. Never fails towards the caller; delivery
/// problems are logged by the implementation.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ReplyChannel {
    async fn send(
        &self,
        message: CreateMessage,
        target: ReplyTarget,
        auto_delete_after: Option<Duration>,
    );

    async fn delete_message(&self, message: Option<Message>, hook: Option<InteractionHook>);
}
