mod args;
mod command;
mod locator;
mod logging;
mod presence;
mod resources;

use crate::args::CommonArgs;
use crate::command::serve::ServeArgs;
use crate::command::Command;
use clap::Parser;

#[derive(Parser)]
#[command(name = "watcher-bot", version, about = "Discord bot serving slash commands")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(flatten)]
    serve: ServeArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let Cli {
        common,
        serve,
        command,
    } = Cli::parse();

    // Sentry has to be initialized before the runtime starts.
    let _sentry = logging::init(&common);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(command.unwrap_or_default().run(serve))
}
