mod descriptor;
mod registry;
mod slash;

use crate::interaction::CommandEvent;
use crate::ports::discord::DiscordError;
use async_trait::async_trait;
pub use descriptor::CommandDescriptor;
pub use registry::{CommandRegistry, CommandRegistryError};
pub use slash::{ParameterKind, SlashDefinition, SlashParameter, SlashSchema};
use thiserror::Error;

#[async_trait]
pub trait Command {
    async fn perform(&self, event: CommandEvent) -> Result<(), CommandError>;
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The target message or interaction no longer exists")]
    TargetVanished,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Discord(DiscordError),
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl CommandError {
    /// Failures caused by the user deleting the target before the bot
    /// replied. These are expected and not reported.
    pub fn is_benign(&self) -> bool {
        matches!(self, CommandError::TargetVanished)
    }
}

impl From<DiscordError> for CommandError {
    fn from(error: DiscordError) -> Self {
        if error.is_vanished_target() {
            CommandError::TargetVanished
        } else {
            CommandError::Discord(error)
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for CommandError {
    fn from(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        CommandError::Other(error)
    }
}
