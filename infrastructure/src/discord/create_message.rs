use crate::discord::create_embed::domain_to_serenity_create_embed;
use domain::ports::discord::CreateMessage;
use ::serenity::all as serenity;

pub fn domain_to_serenity_create_message(message: CreateMessage) -> serenity::CreateMessage {
    let CreateMessage { content, embeds } = message;

    let mut message = serenity::CreateMessage::default();

    if let Some(content) = content {
        message = message.content(content);
    }

    for embed in embeds {
        message = message.add_embed(domain_to_serenity_create_embed(embed));
    }

    message
}

pub fn domain_to_serenity_followup(
    message: CreateMessage,
    ephemeral: bool,
) -> serenity::CreateInteractionResponseFollowup {
    let CreateMessage { content, embeds } = message;

    let mut followup = serenity::CreateInteractionResponseFollowup::default().ephemeral(ephemeral);

    if let Some(content) = content {
        followup = followup.content(content);
    }

    for embed in embeds {
        followup = followup.add_embed(domain_to_serenity_create_embed(embed));
    }

    followup
}
