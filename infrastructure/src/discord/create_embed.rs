use domain::ports::discord::{CreateEmbed, EmbedField};
use ::serenity::all as serenity;

pub fn domain_to_serenity_create_embed(embed: CreateEmbed) -> serenity::CreateEmbed {
    let CreateEmbed {
        title,
        description,
        colour,
        fields,
        footer,
    } = embed;

    let mut embed = serenity::CreateEmbed::default();

    if let Some(title) = title {
        embed = embed.title(title);
    }
    if let Some(description) = description {
        embed = embed.description(description);
    }
    if let Some(colour) = colour {
        embed = embed.colour(colour);
    }
    embed = embed.fields(
        fields
            .into_iter()
            .map(|EmbedField { name, value, inline }| (name, value, inline)),
    );
    if let Some(footer) = footer {
        embed = embed.footer(serenity::CreateEmbedFooter::new(footer));
    }

    embed
}
