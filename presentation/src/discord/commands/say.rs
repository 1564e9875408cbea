use async_trait::async_trait;
use domain::command::{
    Command, CommandDescriptor, CommandError, ParameterKind, SlashParameter, SlashSchema,
};
use domain::interaction::CommandEvent;
use domain::ports::discord::CreateMessage;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

const MAX_DELETE_AFTER_SECONDS: i64 = 3600;

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("say", "Posts a message in this channel", Arc::new(Say))
        .alias("echo")
        .slash_schema(
            SlashSchema::default()
                .parameter(
                    SlashParameter::new("text", "What to post", ParameterKind::String)
                        .required(true),
                )
                .parameter(SlashParameter::new(
                    "delete_after",
                    "Delete the message after this many seconds",
                    ParameterKind::Integer,
                )),
        )
}

struct Say;

#[async_trait]
impl Command for Say {
    #[instrument(level = "info", skip_all)]
    async fn perform(&self, event: CommandEvent) -> Result<(), CommandError> {
        let text = event
            .string("text")
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CommandError::InvalidArgument("text is required".to_string()))?
            .to_string();

        let delete_after = match event.integer("delete_after") {
            None => None,
            Some(seconds) if (1..=MAX_DELETE_AFTER_SECONDS).contains(&seconds) => {
                Some(Duration::from_secs(seconds.unsigned_abs()))
            }
            Some(_) => {
                event
                    .reply(format!(
                        "`delete_after` must be between 1 and {MAX_DELETE_AFTER_SECONDS} seconds."
                    ))
                    .await;
                return Ok(());
            }
        };

        info!(
            channel_id = event.channel_id().0,
            user_id = event.invoker().user_id.0,
            delete_after = delete_after.map(|d| d.as_secs()),
            "Posting message",
        );

        event
            .send_to_channel(CreateMessage::text(text), delete_after)
            .await;
        event.reply("Sent.").await;

        Ok(())
    }
}
