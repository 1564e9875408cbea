use application_ports::command_dispatch::{CommandDispatchError, CommandDispatchPort};
use async_trait::async_trait;
use domain::command::{CommandDescriptor, CommandRegistry};
use domain::interaction::{CommandEvent, IncomingInteraction};
use domain::ports::discord::DiscordPort;
use domain::ports::reply::{ReplyChannel, ReplyTarget};
use domain::responses::Responses;
use domain_shared::discord::GuildId;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct CommandDispatchService {
    registry: Arc<CommandRegistry>,
    reply_channel: Arc<dyn ReplyChannel + Send + Sync>,
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    responses: Responses,
}

impl CommandDispatchService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        registry: Arc<CommandRegistry>,
        reply_channel: Arc<dyn ReplyChannel + Send + Sync>,
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        responses: Responses,
    ) -> Self {
        Self {
            registry,
            reply_channel,
            discord_port,
            responses,
        }
    }

    async fn reply_not_found(&self, target: ReplyTarget) {
        self.reply_channel
            .send(self.responses.command_not_found(), target, None)
            .await;
    }
}

#[async_trait]
impl CommandDispatchPort for CommandDispatchService {
    #[instrument(level = "info", skip_all, fields(command = %interaction.command_name))]
    async fn dispatch(&self, interaction: IncomingInteraction) -> bool {
        let target = interaction.reply_target();

        let Some(descriptor) = self.registry.find_by_slash_name(&interaction.command_name) else {
            warn!(
                channel_id = interaction.channel_id.0,
                "Received interaction for an unknown command",
            );
            self.reply_not_found(target).await;
            return false;
        };

        let event = CommandEvent::from_interaction(
            descriptor.name.clone(),
            interaction,
            self.reply_channel.clone(),
        );
        let Some(event) = event else {
            warn!("Interaction has no invoker or no guild");
            self.reply_not_found(target).await;
            return false;
        };

        tokio::spawn(invoke_command(descriptor, event, self.responses));

        true
    }

    #[instrument(level = "info", skip(self))]
    async fn register_guild_commands(
        &self,
        guild_id: GuildId,
    ) -> Result<(), CommandDispatchError> {
        let definitions = self.registry.build_slash_definitions();
        let count = definitions.len();

        self.discord_port
            .set_guild_commands(guild_id, definitions)
            .await?;

        info!(guild_id = guild_id.0, count, "Slash commands registered");

        Ok(())
    }
}

/// Runs a command handler to completion on its own task. Failures stay
/// inside this invocation: the benign ones are dropped, everything else is
/// logged and answered with a generic error. There is no retry.
#[instrument(
    level = "info",
    skip_all,
    fields(
        command = %descriptor.name,
        guild_id = event.guild_id().0,
        channel_id = event.channel_id().0,
        user_id = event.invoker().user_id.0,
    )
)]
pub async fn invoke_command(
    descriptor: Arc<CommandDescriptor>,
    event: CommandEvent,
    responses: Responses,
) {
    let handler = descriptor.handler.clone();
    let reply_to = event.clone();

    let outcome = tokio::spawn(async move { handler.perform(event).await }).await;

    match outcome {
        Ok(Ok(())) => debug!("Command performed"),
        Ok(Err(error)) if error.is_benign() => {
            debug!(error = %error, "Command target vanished before the reply");
        }
        Ok(Err(error)) => {
            error!(error = %error, "An error occurred while executing the command");
            reply_to.reply_message(responses.internal_error()).await;
        }
        Err(join_error) => {
            error!(error = %join_error, "Command handler panicked");
            reply_to.reply_message(responses.internal_error()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::command::{Command, CommandError};
    use domain::interaction::Invoker;
    use domain::ports::discord::{
        ChannelId, DiscordError, InteractionHook, MockDiscordPort,
    };
    use domain::ports::reply::MockReplyChannel;
    use domain_shared::discord::UserId;
    use std::sync::Mutex;
    use tokio::sync::mpsc;
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Records the level of every warning or error emitted on this thread.
    #[derive(Clone, Default)]
    struct EscalatedLevels(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for EscalatedLevels {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let level = *event.metadata().level();
            if level <= Level::WARN {
                self.0.lock().unwrap().push(level);
            }
        }
    }

    impl EscalatedLevels {
        fn install(&self) -> DefaultGuard {
            tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
        }

        fn recorded(&self) -> Vec<Level> {
            self.0.lock().unwrap().clone()
        }
    }

    enum Outcome {
        Succeed,
        Vanish,
        Fail,
        Panic,
    }

    struct TestCommand {
        calls: mpsc::UnboundedSender<String>,
        outcome: Outcome,
    }

    #[async_trait]
    impl Command for TestCommand {
        async fn perform(&self, event: CommandEvent) -> Result<(), CommandError> {
            let _ = self.calls.send(event.command().to_string());
            match self.outcome {
                Outcome::Succeed => Ok(()),
                Outcome::Vanish => Err(DiscordError::UnknownMessage.into()),
                Outcome::Fail => Err(CommandError::Other("database exploded".into())),
                Outcome::Panic => panic!("handler bug"),
            }
        }
    }

    fn descriptor(outcome: Outcome) -> (Arc<CommandDescriptor>, mpsc::UnboundedReceiver<String>) {
        let (calls, received) = mpsc::unbounded_channel();
        let handler = Arc::new(TestCommand { calls, outcome });
        let descriptor = CommandDescriptor::new("ping", "Replies with pong", handler);
        (Arc::new(descriptor), received)
    }

    fn interaction(name: &str) -> IncomingInteraction {
        IncomingInteraction::new(name, ChannelId(10))
            .invoker(Invoker {
                user_id: UserId(3),
                display_name: "josemc".to_string(),
            })
            .guild(GuildId(1))
            .hook(InteractionHook::new("token"))
    }

    fn dispatcher(
        descriptor: Arc<CommandDescriptor>,
        reply_channel: MockReplyChannel,
        discord_port: MockDiscordPort,
    ) -> CommandDispatchService {
        let registry = CommandRegistry::from_descriptors(vec![descriptor]).unwrap();
        CommandDispatchService::new(
            Arc::new(registry),
            Arc::new(reply_channel),
            Arc::new(discord_port),
            Responses::default(),
        )
    }

    fn expect_reply(reply_channel: &mut MockReplyChannel, expected: domain::ports::discord::CreateMessage) {
        reply_channel
            .expect_send()
            .withf(move |message, target, auto_delete_after| {
                *message == expected
                    && target.hook == Some(InteractionHook::new("token"))
                    && auto_delete_after.is_none()
            })
            .times(1)
            .return_const(());
    }

    #[tokio::test]
    async fn known_command_is_invoked_once() {
        let (descriptor, mut calls) = descriptor(Outcome::Succeed);
        let mut reply_channel = MockReplyChannel::new();
        reply_channel.expect_send().never();
        let dispatcher = dispatcher(descriptor, reply_channel, MockDiscordPort::new());

        assert!(dispatcher.dispatch(interaction("PING")).await);

        assert_eq!(calls.recv().await.as_deref(), Some("ping"));
        tokio::task::yield_now().await;
        assert!(calls.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_command_replies_not_found() {
        let (descriptor, mut calls) = descriptor(Outcome::Succeed);
        let mut reply_channel = MockReplyChannel::new();
        expect_reply(&mut reply_channel, Responses::default().command_not_found());
        let dispatcher = dispatcher(descriptor, reply_channel, MockDiscordPort::new());

        assert!(!dispatcher.dispatch(interaction("pong")).await);

        tokio::task::yield_now().await;
        assert!(calls.try_recv().is_err());
    }

    #[tokio::test]
    async fn missing_invoker_is_not_dispatched() {
        let (descriptor, mut calls) = descriptor(Outcome::Succeed);
        let mut reply_channel = MockReplyChannel::new();
        expect_reply(&mut reply_channel, Responses::default().command_not_found());
        let dispatcher = dispatcher(descriptor, reply_channel, MockDiscordPort::new());

        let mut interaction = interaction("ping");
        interaction.invoker = None;

        assert!(!dispatcher.dispatch(interaction).await);

        tokio::task::yield_now().await;
        assert!(calls.try_recv().is_err());
    }

    #[tokio::test]
    async fn missing_guild_is_not_dispatched() {
        let (descriptor, mut calls) = descriptor(Outcome::Succeed);
        let mut reply_channel = MockReplyChannel::new();
        expect_reply(&mut reply_channel, Responses::default().command_not_found());
        let dispatcher = dispatcher(descriptor, reply_channel, MockDiscordPort::new());

        let mut interaction = interaction("ping");
        interaction.guild_id = None;

        assert!(!dispatcher.dispatch(interaction).await);

        tokio::task::yield_now().await;
        assert!(calls.try_recv().is_err());
    }

    fn event(reply_channel: MockReplyChannel) -> CommandEvent {
        CommandEvent::from_interaction("ping", interaction("ping"), Arc::new(reply_channel))
            .unwrap()
    }

    #[tokio::test]
    async fn vanished_target_is_silent() {
        let (descriptor, _calls) = descriptor(Outcome::Vanish);
        let mut reply_channel = MockReplyChannel::new();
        reply_channel.expect_send().never();
        let levels = EscalatedLevels::default();
        let _guard = levels.install();

        invoke_command(descriptor, event(reply_channel), Responses::default()).await;

        assert!(levels.recorded().is_empty());
    }

    #[tokio::test]
    async fn handler_failure_replies_internal_error_once() {
        let (descriptor, _calls) = descriptor(Outcome::Fail);
        let mut reply_channel = MockReplyChannel::new();
        expect_reply(&mut reply_channel, Responses::default().internal_error());

        let levels = EscalatedLevels::default();
        let _guard = levels.install();

        invoke_command(descriptor, event(reply_channel), Responses::default()).await;

        assert_eq!(levels.recorded(), vec![Level::ERROR]);
    }

    #[tokio::test]
    async fn handler_panic_replies_internal_error_once() {
        let (descriptor, _calls) = descriptor(Outcome::Panic);
        let mut reply_channel = MockReplyChannel::new();
        expect_reply(&mut reply_channel, Responses::default().internal_error());

        let levels = EscalatedLevels::default();
        let _guard = levels.install();

        invoke_command(descriptor, event(reply_channel), Responses::default()).await;

        assert_eq!(levels.recorded(), vec![Level::ERROR]);
    }

    #[tokio::test]
    async fn guild_ready_uploads_every_definition() {
        let (descriptor, _calls) = descriptor(Outcome::Succeed);
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_set_guild_commands()
            .withf(|guild_id, commands| {
                *guild_id == GuildId(1)
                    && commands.len() == 1
                    && commands[0].name == "ping"
                    && commands[0].guild_only
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = dispatcher(descriptor, MockReplyChannel::new(), discord_port);

        dispatcher.register_guild_commands(GuildId(1)).await.unwrap();
    }

    #[tokio::test]
    async fn guild_ready_propagates_upload_failure() {
        let (descriptor, _calls) = descriptor(Outcome::Succeed);
        let mut discord_port = MockDiscordPort::new();
        discord_port
            .expect_set_guild_commands()
            .returning(|_, _| Err(DiscordError::MissingPermissions));
        let dispatcher = dispatcher(descriptor, MockReplyChannel::new(), discord_port);

        let result = dispatcher.register_guild_commands(GuildId(1)).await;

        assert!(matches!(
            result,
            Err(CommandDispatchError::Discord(DiscordError::MissingPermissions))
        ));
    }
}
