use infrastructure::config::{ActivityConfig, ActivityKind, PresenceConfig, StatusConfig};
use presentation::discord::Presence;
use serenity::all::{ActivityData, OnlineStatus};

pub fn serenity_presence(config: &PresenceConfig) -> anyhow::Result<Presence> {
    let status = match config.status {
        StatusConfig::Online => OnlineStatus::Online,
        StatusConfig::Idle => OnlineStatus::Idle,
        StatusConfig::DoNotDisturb => OnlineStatus::DoNotDisturb,
        StatusConfig::Invisible => OnlineStatus::Invisible,
        StatusConfig::Offline => OnlineStatus::Offline,
    };

    let activity = config
        .activity
        .as_ref()
        .map(serenity_activity)
        .transpose()?;

    Ok(Presence { status, activity })
}

fn serenity_activity(activity: &ActivityConfig) -> anyhow::Result<ActivityData> {
    let ActivityConfig { kind, message, url } = activity;

    let activity = match kind {
        ActivityKind::Playing => ActivityData::playing(message),
        ActivityKind::Streaming => {
            ActivityData::streaming(message, url.as_deref().unwrap_or_default())?
        }
        ActivityKind::Listening => ActivityData::listening(message),
        ActivityKind::Watching => ActivityData::watching(message),
        ActivityKind::Competing => ActivityData::competing(message),
        ActivityKind::Custom => ActivityData::custom(message),
    };

    Ok(activity)
}
