use crate::locator::ApplicationPortLocator;
use crate::presence::serenity_presence;
use crate::resources::DEFAULT_CONFIG_YML;
use anyhow::{anyhow, Context};
use application::command_dispatch::CommandDispatchService;
use application::reply::ReplyService;
use clap::Args;
use domain::command::CommandRegistry;
use domain::responses::Responses;
use infrastructure::config::{ConfigStore, DEFAULT_CONFIG_PATH};
use infrastructure::discord::DiscordAdapter;
use presentation::discord::commands::enabled_commands;
use presentation::discord::{default_intents, run_bot};
use serenity::all::Http;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub discord_bot_token: Option<String>,
    /// Path of the YAML configuration, created from defaults when missing
    #[arg(long, env = "WATCHER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[instrument(level = "trace", skip(args))]
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs {
        discord_bot_token,
        config,
    } = args;
    let discord_bot_token = discord_bot_token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| anyhow!("DISCORD_BOT_TOKEN is not set"))?;

    info!(path = %config.display(), "Loading bot configuration");
    let config_store = ConfigStore::load_or_seed(&config, DEFAULT_CONFIG_YML)
        .with_context(|| format!("Failed to load configuration from {}", config.display()))?;
    let presence = config_store
        .presence()
        .context("Invalid presence configuration")?;

    let registry = CommandRegistry::from_descriptors(enabled_commands())
        .context("Failed to initialize commands")?;

    let serenity_client = Arc::new(Http::new(&discord_bot_token));
    let application = serenity_client
        .get_current_application_info()
        .await
        .context("Failed to authenticate with Discord")?;
    serenity_client.set_application_id(application.id);
    let bot_user = serenity_client.get_current_user().await?;

    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client.clone(), bot_user.id));
    let reply_service = Arc::new(ReplyService::new(discord_adapter.clone()));
    let command_dispatch_adapter = Arc::new(CommandDispatchService::new(
        Arc::new(registry),
        reply_service,
        discord_adapter,
        Responses::new(presence.language),
    ));

    let locator = ApplicationPortLocator::new(command_dispatch_adapter);

    let bot = tokio::spawn(run_bot(
        locator,
        discord_bot_token,
        default_intents(),
        serenity_presence(&presence)?,
    ));

    bot.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
