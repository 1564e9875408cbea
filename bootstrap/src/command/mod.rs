pub mod commands;
pub mod serve;

use crate::command::serve::ServeArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Connect to Discord and serve the slash commands
    #[default]
    #[command(name = "serve")]
    Serve,
    /// Print the slash commands that would be registered in each guild
    #[command(name = "commands")]
    Commands,
}

impl Command {
    #[instrument(level = "trace", skip(self, serve_args))]
    pub async fn run(self, serve_args: ServeArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve => serve::run(serve_args).await,
            Command::Commands => commands::run(),
        }
    }
}
