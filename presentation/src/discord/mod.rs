use crate::application_ports::Locator;
use ::serenity::all as serenity;
use ::serenity::all::{ActivityData, ClientBuilder, Context, Guild, Interaction, OnlineStatus, Ready};
use async_trait::async_trait;
use domain_shared::discord::GuildId;
use tracing::{error, info, instrument, warn};

pub mod commands;
mod interaction;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub struct Presence {
    pub status: OnlineStatus,
    pub activity: Option<ActivityData>,
}

/// Non-privileged intents plus members and direct messages.
pub fn default_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::DIRECT_MESSAGES
}

#[instrument(level = "info", skip_all)]
pub async fn run_bot<L: Locator + Send + Sync + 'static>(
    locator: L,
    token: String,
    intents: serenity::GatewayIntents,
    presence: Presence,
) -> Result<(), Error> {
    let Presence { status, activity } = presence;

    let mut builder = ClientBuilder::new(token, intents)
        .event_handler(EventHandler { locator })
        .status(status);
    if let Some(activity) = activity {
        builder = builder.activity(activity);
    }

    let mut client = builder.await?;
    client.start_autosharded().await?;

    Ok(())
}

struct EventHandler<L> {
    locator: L,
}

#[async_trait]
impl<L: Locator + Send + Sync + 'static> serenity::EventHandler for EventHandler<L> {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            shard = ?ready.shard,
            "Connected to Discord",
        );
    }

    #[instrument(level = "info", skip_all, fields(guild_id = guild.id.get()))]
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let port = self.locator.get_command_dispatch_port();

        if let Err(error) = port.register_guild_commands(GuildId(guild.id.get())).await {
            error!(error = %error, "Failed to register slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        // Without the acknowledgement the hook is unusable, so the interaction is dropped.
        if let Err(error) = command.defer_ephemeral(&ctx.http).await {
            warn!(
                command = %command.data.name,
                error = %error,
                "Failed to acknowledge interaction",
            );
            return;
        }

        let interaction = interaction::serenity_to_domain_interaction(&command);
        self.locator
            .get_command_dispatch_port()
            .dispatch(interaction)
            .await;
    }
}
