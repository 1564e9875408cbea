use async_trait::async_trait;
use chrono::Utc;
use domain::command::{Command, CommandDescriptor, CommandError};
use domain::interaction::CommandEvent;
use std::sync::Arc;
use tracing::{info, instrument};

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new("ping", "Checks that the bot is alive", Arc::new(Ping)).alias("pong")
}

struct Ping;

#[async_trait]
impl Command for Ping {
    #[instrument(level = "info", skip_all)]
    async fn perform(&self, event: CommandEvent) -> Result<(), CommandError> {
        let latency = Utc::now() - event.received_at();

        info!(
            guild_id = event.guild_id().0,
            user_id = event.invoker().user_id.0,
            latency_ms = latency.num_milliseconds(),
            "Ping",
        );

        event
            .reply(format!("Pong! ({} ms)", latency.num_milliseconds().max(0)))
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::commands::test_support::{event, recording_reply_channel};

    #[tokio::test]
    async fn replies_pong_through_hook() {
        let (reply_channel, sent) = recording_reply_channel();

        Ping.perform(event("ping", vec![], reply_channel))
            .await
            .unwrap();

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0]
            .0
            .content
            .as_deref()
            .is_some_and(|content| content.starts_with("Pong!")));
        assert!(sent[0].1.hook.is_some());
    }
}
