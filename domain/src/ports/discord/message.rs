use domain_shared::discord::{ChannelId, GuildId, MessageId};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub kind: MessageKind,
    pub ephemeral: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Regular,
    Reply,
    ChatInputCommand,
    ContextMenuCommand,
    PinsAdd,
    MemberJoin,
    NitroBoost,
    ThreadCreated,
    RecipientAdd,
    RecipientRemove,
    Call,
    ChannelNameChange,
    ChannelIconChange,
    ThreadStarterMessage,
    Unknown(u8),
}

impl MessageKind {
    /// Group DM notices and thread starters cannot be deleted by anyone.
    pub fn is_deletable(self) -> bool {
        !matches!(
            self,
            MessageKind::RecipientAdd
                | MessageKind::RecipientRemove
                | MessageKind::Call
                | MessageKind::ChannelNameChange
                | MessageKind::ChannelIconChange
                | MessageKind::ThreadStarterMessage
                | MessageKind::Unknown(_)
        )
    }
}

/// Acknowledgement hook of a deferred interaction. Followups sent through it
/// live and die with the interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionHook {
    pub token: String,
}

impl InteractionHook {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_deletable() {
        assert!(MessageKind::Regular.is_deletable());
        assert!(MessageKind::Reply.is_deletable());
        assert!(MessageKind::ChatInputCommand.is_deletable());
        assert!(MessageKind::MemberJoin.is_deletable());
    }

    #[test]
    fn system_notices_are_not_deletable() {
        assert!(!MessageKind::ThreadStarterMessage.is_deletable());
        assert!(!MessageKind::Call.is_deletable());
        assert!(!MessageKind::Unknown(255).is_deletable());
    }
}
