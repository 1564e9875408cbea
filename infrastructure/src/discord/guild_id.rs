use domain::ports::discord::GuildId;
use ::serenity::all as serenity;

pub fn domain_to_serenity_guild_id(guild_id: GuildId) -> serenity::GuildId {
    serenity::GuildId::new(guild_id.0)
}

pub fn serenity_to_domain_guild_id(guild_id: serenity::GuildId) -> GuildId {
    GuildId(guild_id.get())
}
