use domain::command::CommandDescriptor;
use std::sync::Arc;
use tracing::instrument;

mod help;
mod ping;
mod say;

/// Static list of the commands the bot serves. `help` is built last so it
/// can describe the others.
#[instrument(level = "trace")]
pub fn enabled_commands() -> Vec<Arc<CommandDescriptor>> {
    let mut commands = vec![Arc::new(ping::descriptor()), Arc::new(say::descriptor())];

    let help = help::descriptor(&commands);
    commands.push(Arc::new(help));

    commands
}

#[cfg(test)]
pub(crate) mod test_support {
    use domain::interaction::{CommandEvent, IncomingInteraction, Invoker, OptionValue};
    use domain::ports::discord::{ChannelId, CreateMessage, GuildId, InteractionHook};
    use domain::ports::reply::{MockReplyChannel, ReplyTarget};
    use domain_shared::discord::UserId;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    pub type Sent = Arc<Mutex<Vec<(CreateMessage, ReplyTarget, Option<Duration>)>>>;

    pub fn recording_reply_channel() -> (MockReplyChannel, Sent) {
        let sent: Sent = Arc::default();
        let mut reply_channel = MockReplyChannel::new();
        let recorded = sent.clone();
        reply_channel
            .expect_send()
            .returning(move |message, target, auto_delete_after| {
                recorded
                    .lock()
                    .unwrap()
                    .push((message, target, auto_delete_after));
            });
        (reply_channel, sent)
    }

    pub fn event(
        command: &str,
        options: Vec<(&str, OptionValue)>,
        reply_channel: MockReplyChannel,
    ) -> CommandEvent {
        let mut interaction = IncomingInteraction::new(command, ChannelId(10))
            .invoker(Invoker {
                user_id: UserId(3),
                display_name: "josemc".to_string(),
            })
            .guild(GuildId(1))
            .hook(InteractionHook::new("token"));
        for (name, value) in options {
            interaction = interaction.option(name, value);
        }

        CommandEvent::from_interaction(command, interaction, Arc::new(reply_channel)).unwrap()
    }
}
