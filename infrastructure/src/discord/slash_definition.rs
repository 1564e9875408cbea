use domain::command::{ParameterKind, SlashDefinition, SlashParameter};
use ::serenity::all as serenity;

#[allow(deprecated)]
pub fn domain_to_serenity_create_command(definition: SlashDefinition) -> serenity::CreateCommand {
    let SlashDefinition {
        name,
        description,
        guild_only,
        parameters,
    } = definition;

    let mut command = serenity::CreateCommand::new(name)
        .description(description)
        .dm_permission(!guild_only);

    for parameter in parameters {
        command = command.add_option(domain_to_serenity_create_option(parameter));
    }

    command
}

fn domain_to_serenity_create_option(parameter: SlashParameter) -> serenity::CreateCommandOption {
    let SlashParameter {
        name,
        description,
        kind,
        required,
    } = parameter;

    let kind = match kind {
        ParameterKind::String => serenity::CommandOptionType::String,
        ParameterKind::Integer => serenity::CommandOptionType::Integer,
        ParameterKind::Number => serenity::CommandOptionType::Number,
        ParameterKind::Boolean => serenity::CommandOptionType::Boolean,
        ParameterKind::User => serenity::CommandOptionType::User,
        ParameterKind::Channel => serenity::CommandOptionType::Channel,
        ParameterKind::Role => serenity::CommandOptionType::Role,
    };

    serenity::CreateCommandOption::new(kind, name, description).required(required)
}
