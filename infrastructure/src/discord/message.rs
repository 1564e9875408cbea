use crate::discord::channel_id::serenity_to_domain_channel_id;
use crate::discord::guild_id::serenity_to_domain_guild_id;
use crate::discord::message_id::serenity_to_domain_message_id;
use domain::ports::discord::{Message, MessageKind};
use ::serenity::all as serenity;

pub fn serenity_to_domain_message(message: &serenity::Message) -> Message {
    let ephemeral = message
        .flags
        .is_some_and(|flags| flags.contains(serenity::MessageFlags::EPHEMERAL));

    Message {
        id: serenity_to_domain_message_id(message.id),
        channel_id: serenity_to_domain_channel_id(message.channel_id),
        guild_id: message.guild_id.map(serenity_to_domain_guild_id),
        kind: serenity_to_domain_message_kind(message.kind),
        ephemeral,
    }
}

fn serenity_to_domain_message_kind(kind: serenity::MessageType) -> MessageKind {
    use ::serenity::all::MessageType;

    match kind {
        MessageType::Regular => MessageKind::Regular,
        MessageType::InlineReply => MessageKind::Reply,
        MessageType::ChatInputCommand => MessageKind::ChatInputCommand,
        MessageType::ContextMenuCommand => MessageKind::ContextMenuCommand,
        MessageType::PinsAdd => MessageKind::PinsAdd,
        MessageType::MemberJoin => MessageKind::MemberJoin,
        MessageType::NitroBoost
        | MessageType::NitroTier1
        | MessageType::NitroTier2
        | MessageType::NitroTier3 => MessageKind::NitroBoost,
        MessageType::ThreadCreated => MessageKind::ThreadCreated,
        MessageType::GroupRecipientAddition => MessageKind::RecipientAdd,
        MessageType::GroupRecipientRemoval => MessageKind::RecipientRemove,
        MessageType::GroupCallCreation => MessageKind::Call,
        MessageType::GroupNameUpdate => MessageKind::ChannelNameChange,
        MessageType::GroupIconUpdate => MessageKind::ChannelIconChange,
        MessageType::ThreadStarterMessage => MessageKind::ThreadStarterMessage,
        other => MessageKind::Unknown(u8::from(other)),
    }
}
