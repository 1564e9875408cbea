use anyhow::Context;
use domain::command::CommandRegistry;
use presentation::discord::commands::enabled_commands;
use std::io::Write;

pub fn run() -> anyhow::Result<()> {
    let registry = CommandRegistry::from_descriptors(enabled_commands())
        .context("Failed to initialize commands")?;

    let mut stdout = std::io::stdout().lock();
    for definition in registry.build_slash_definitions() {
        writeln!(stdout, "/{}: {}", definition.name, definition.description)?;
        for parameter in definition.parameters {
            writeln!(
                stdout,
                "    {} ({:?}{}): {}",
                parameter.name,
                parameter.kind,
                if parameter.required { ", required" } else { "" },
                parameter.description,
            )?;
        }
    }

    Ok(())
}
