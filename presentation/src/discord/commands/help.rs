use async_trait::async_trait;
use domain::command::{Command, CommandDescriptor, CommandError};
use domain::interaction::CommandEvent;
use domain::ports::discord::CreateEmbed;
use std::sync::Arc;

const HELP_COLOUR: u32 = 0x5865F2;

pub fn descriptor(commands: &[Arc<CommandDescriptor>]) -> CommandDescriptor {
    let mut entries: Vec<HelpEntry> = commands
        .iter()
        .map(|descriptor| HelpEntry {
            name: descriptor.slash_name().to_string(),
            description: descriptor.description.clone(),
            aliases: descriptor.aliases.clone(),
        })
        .collect();
    entries.push(HelpEntry {
        name: "help".to_string(),
        description: "Lists the available commands".to_string(),
        aliases: Vec::new(),
    });

    CommandDescriptor::new(
        "help",
        "Lists the available commands",
        Arc::new(Help { entries }),
    )
}

struct HelpEntry {
    name: String,
    description: String,
    aliases: Vec<String>,
}

struct Help {
    entries: Vec<HelpEntry>,
}

#[async_trait]
impl Command for Help {
    async fn perform(&self, event: CommandEvent) -> Result<(), CommandError> {
        let mut embed = CreateEmbed::default()
            .title("Commands")
            .colour(HELP_COLOUR);

        for entry in &self.entries {
            let value = if entry.aliases.is_empty() {
                entry.description.clone()
            } else {
                format!("{} (aliases: {})", entry.description, entry.aliases.join(", "))
            };
            embed = embed.field(format!("/{}", entry.name), value, false);
        }

        event.reply_embed(embed).await;

        Ok(())
    }
}
