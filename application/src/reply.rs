use async_trait::async_trait;
use domain::ports::discord::{
    ChannelId, CreateMessage, DiscordError, DiscordPort, InteractionHook, Message,
};
use domain::ports::reply::{ReplyChannel, ReplyTarget};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument, warn};

pub struct ReplyService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
}

impl ReplyService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(discord_port: Arc<dyn DiscordPort + Send + Sync>) -> Self {
        Self { discord_port }
    }

    #[instrument(level = "debug", skip(self, message))]
    async fn send_to_channel(
        &self,
        message: CreateMessage,
        channel_id: ChannelId,
        auto_delete_after: Option<Duration>,
    ) {
        match self.discord_port.can_talk(channel_id).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(channel_id = channel_id.0, "Not allowed to talk in channel");
                return;
            }
            Err(error) => {
                warn!(channel_id = channel_id.0, error = %error, "Failed to resolve channel permissions");
                return;
            }
        }

        let sent = match self.discord_port.send_message(channel_id, message).await {
            Ok(sent) => sent,
            Err(error) => {
                warn!(channel_id = channel_id.0, error = %error, "Failed to send message");
                return;
            }
        };

        if let Some(delay) = auto_delete_after {
            self.schedule_deletion(sent, delay);
        }
    }

    /// Deletes the message after `delay` if it still exists by then. There
    /// is no way to cancel the deletion once scheduled.
    fn schedule_deletion(&self, message: Message, delay: Duration) -> JoinHandle<()> {
        let discord_port = self.discord_port.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match discord_port
                .fetch_message(message.channel_id, message.id)
                .await
            {
                Ok(Some(message)) => {
                    if let Err(error) = discord_port
                        .delete_message(message.channel_id, message.id)
                        .await
                    {
                        log_delete_failure(&message, error);
                    }
                }
                Ok(None) => {
                    debug!(message_id = message.id.0, "Message already gone");
                }
                Err(error) => log_delete_failure(&message, error),
            }
        })
    }
}

#[async_trait]
impl ReplyChannel for ReplyService {
    #[instrument(level = "debug", skip(self, message))]
    async fn send(
        &self,
        message: CreateMessage,
        target: ReplyTarget,
        auto_delete_after: Option<Duration>,
    ) {
        let ReplyTarget { channel_id, hook } = target;

        match hook {
            Some(hook) => {
                if let Err(error) = self.discord_port.send_followup(hook, message, true).await {
                    warn!(channel_id = channel_id.0, error = %error, "Failed to reply through interaction hook");
                }
            }
            None => {
                self.send_to_channel(message, channel_id, auto_delete_after)
                    .await
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_message(&self, message: Option<Message>, hook: Option<InteractionHook>) {
        let Some(message) = message else {
            return;
        };

        // Hook replies are owned by the interaction.
        if hook.is_some() || message.ephemeral || !message.kind.is_deletable() {
            return;
        }

        match self.discord_port.has_manage_messages(message.channel_id).await {
            Ok(true) => {}
            Ok(false) => return,
            Err(error) => {
                warn!(error = %error, "Failed to resolve manage messages permission");
                return;
            }
        }

        match self
            .discord_port
            .fetch_message(message.channel_id, message.id)
            .await
        {
            Ok(Some(_)) => {}
            Ok(None) => return,
            Err(error) => {
                log_delete_failure(&message, error);
                return;
            }
        }

        if let Err(error) = self
            .discord_port
            .delete_message(message.channel_id, message.id)
            .await
        {
            log_delete_failure(&message, error);
        }
    }
}

fn log_delete_failure(message: &Message, error: DiscordError) {
    if let DiscordError::UnknownMessage = error {
        debug!(message_id = message.id.0, "Message was deleted before we could delete it");
    } else {
        error!(message_id = message.id.0, error = %error, "Couldn't delete a message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ports::discord::{MessageKind, MockDiscordPort};
    use domain_shared::discord::{GuildId, MessageId};

    fn message(id: u64) -> Message {
        Message {
            id: MessageId(id),
            channel_id: ChannelId(10),
            guild_id: Some(GuildId(1)),
            kind: MessageKind::Regular,
            ephemeral: false,
        }
    }

    fn service(discord_port: MockDiscordPort) -> ReplyService {
        ReplyService::new(Arc::new(discord_port))
    }

    #[tokio::test]
    async fn hook_replies_are_ephemeral_and_never_deleted() {
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_send_followup()
            .withf(|hook, message, ephemeral| {
                hook.token == "token" && message.content.as_deref() == Some("pong") && *ephemeral
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        discord_port.expect_send_message().never();
        discord_port.expect_can_talk().never();

        service(discord_port)
            .send(
                CreateMessage::text("pong"),
                ReplyTarget::hook(ChannelId(10), InteractionHook::new("token")),
                Some(Duration::from_secs(5)),
            )
            .await;
    }

    #[tokio::test]
    async fn channel_send_is_skipped_without_permission() {
        let mut discord_port = MockDiscordPort::new();
        discord_port.expect_can_talk().times(1).returning(|_| Ok(false));
        discord_port.expect_send_message().never();

        service(discord_port)
            .send(
                CreateMessage::text("hello"),
                ReplyTarget::channel(ChannelId(10)),
                None,
            )
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn auto_delete_removes_message_after_delay() {
        let mut discord_port = MockDiscordPort::new();
        discord_port.expect_can_talk().returning(|_| Ok(true));
        discord_port
            .expect_send_message()
            .times(1)
            .returning(|_, _| Ok(message(99)));
        discord_port
            .expect_fetch_message()
            .withf(|channel_id, message_id| *channel_id == ChannelId(10) && *message_id == MessageId(99))
            .times(1)
            .returning(|_, _| Ok(Some(message(99))));
        discord_port
            .expect_delete_message()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(discord_port);
        service
            .send(
                CreateMessage::text("temporary"),
                ReplyTarget::channel(ChannelId(10)),
                Some(Duration::from_secs(5)),
            )
            .await;

        tokio::time::sleep(Duration::from_secs(6)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn auto_delete_skips_message_that_is_already_gone() {
        let mut discord_port = MockDiscordPort::new();
        discord_port.expect_can_talk().returning(|_| Ok(true));
        discord_port
            .expect_send_message()
            .returning(|_, _| Ok(message(99)));
        discord_port
            .expect_fetch_message()
            .times(1)
            .returning(|_, _| Ok(None));
        discord_port.expect_delete_message().never();

        let service = service(discord_port);
        let sent = message(99);
        service.schedule_deletion(sent, Duration::from_secs(1)).await.unwrap();
    }

    #[tokio::test]
    async fn delete_is_noop_when_hook_is_present() {
        let mut discord_port = MockDiscordPort::new();
        discord_port.expect_has_manage_messages().never();
        discord_port.expect_fetch_message().never();
        discord_port.expect_delete_message().never();

        service(discord_port)
            .delete_message(Some(message(5)), Some(InteractionHook::new("token")))
            .await;
    }

    #[tokio::test]
    async fn delete_requires_manage_messages() {
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_has_manage_messages()
            .times(1)
            .returning(|_| Ok(false));
        discord_port.expect_delete_message().never();

        service(discord_port)
            .delete_message(Some(message(5)), None)
            .await;
    }

    #[tokio::test]
    async fn delete_skips_ephemeral_and_system_messages() {
        let mut discord_port = MockDiscordPort::new();
        discord_port.expect_delete_message().never();
        let service = service(discord_port);

        let mut ephemeral = message(5);
        ephemeral.ephemeral = true;
        service.delete_message(Some(ephemeral), None).await;

        let mut starter = message(6);
        starter.kind = MessageKind::ThreadStarterMessage;
        service.delete_message(Some(starter), None).await;

        service.delete_message(None, None).await;
    }

    #[tokio::test]
    async fn delete_removes_existing_message() {
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_has_manage_messages()
            .returning(|_| Ok(true));
        discord_port
            .expect_fetch_message()
            .returning(|_, _| Ok(Some(message(5))));
        discord_port
            .expect_delete_message()
            .withf(|channel_id, message_id| *channel_id == ChannelId(10) && *message_id == MessageId(5))
            .times(1)
            .returning(|_, _| Ok(()));

        service(discord_port)
            .delete_message(Some(message(5)), None)
            .await;
    }

    #[tokio::test]
    async fn delete_race_is_swallowed() {
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_has_manage_messages()
            .returning(|_| Ok(true));
        discord_port
            .expect_fetch_message()
            .returning(|_, _| Ok(Some(message(5))));
        discord_port
            .expect_delete_message()
            .times(1)
            .returning(|_, _| Err(DiscordError::UnknownMessage));

        service(discord_port)
            .delete_message(Some(message(5)), None)
            .await;
    }
}
