use domain::ports::discord::ChannelId;
use ::serenity::all as serenity;

pub fn domain_to_serenity_channel_id(channel_id: ChannelId) -> serenity::ChannelId {
    serenity::ChannelId::new(channel_id.0)
}

pub fn serenity_to_domain_channel_id(channel_id: serenity::ChannelId) -> ChannelId {
    ChannelId(channel_id.get())
}
