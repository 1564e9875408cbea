use domain::ports::discord::MessageId;
use ::serenity::all as serenity;

pub fn domain_to_serenity_message_id(message_id: MessageId) -> serenity::MessageId {
    serenity::MessageId::new(message_id.0)
}

pub fn serenity_to_domain_message_id(message_id: serenity::MessageId) -> MessageId {
    MessageId(message_id.get())
}
