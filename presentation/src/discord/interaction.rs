use ::serenity::all::{CommandDataOption, CommandDataOptionValue, CommandInteraction};
use domain::interaction::{CommandOption, IncomingInteraction, Invoker, OptionValue};
use domain::ports::discord::{ChannelId, InteractionHook};
use domain_shared::discord::{GuildId, RoleId, UserId};
use tracing::instrument;

#[instrument(level = "trace", skip_all)]
pub fn serenity_to_domain_interaction(command: &CommandInteraction) -> IncomingInteraction {
    let mut interaction = IncomingInteraction::new(
        command.data.name.clone(),
        ChannelId(command.channel_id.get()),
    )
    .hook(InteractionHook::new(command.token.clone()));

    if let Some(guild_id) = command.guild_id {
        interaction = interaction.guild(GuildId(guild_id.get()));
    }

    if let Some(member) = &command.member {
        interaction = interaction.invoker(Invoker {
            user_id: UserId(member.user.id.get()),
            display_name: member.display_name().to_string(),
        });
    }

    interaction.options = command
        .data
        .options
        .iter()
        .filter_map(serenity_to_domain_option)
        .collect();

    interaction
}

fn serenity_to_domain_option(option: &CommandDataOption) -> Option<CommandOption> {
    let value = match &option.value {
        CommandDataOptionValue::String(value) => OptionValue::String(value.clone()),
        CommandDataOptionValue::Integer(value) => OptionValue::Integer(*value),
        CommandDataOptionValue::Number(value) => OptionValue::Number(*value),
        CommandDataOptionValue::Boolean(value) => OptionValue::Boolean(*value),
        CommandDataOptionValue::User(id) => OptionValue::User(UserId(id.get())),
        CommandDataOptionValue::Channel(id) => OptionValue::Channel(ChannelId(id.get())),
        CommandDataOptionValue::Role(id) => OptionValue::Role(RoleId(id.get())),
        _ => return None,
    };

    Some(CommandOption {
        name: option.name.clone(),
        value,
    })
}
