use crate::command::descriptor::names_match;
use crate::command::{CommandDescriptor, SlashDefinition};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum CommandRegistryError {
    #[error("Invalid command descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("A different command is already registered as `{0}`")]
    DuplicateName(String),
}

/// The set of commands the bot serves, in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a static list of commands. Any failure aborts the whole
    /// list, a partially loaded command set is never returned.
    #[instrument(level = "info", skip_all)]
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = Arc<CommandDescriptor>>,
    ) -> Result<Self, CommandRegistryError> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            info!(command = %descriptor.name, "Loading command");
            registry.register(descriptor)?;
        }
        info!(count = registry.len(), "Commands loaded");
        Ok(registry)
    }

    #[instrument(level = "debug", skip_all, fields(command = %descriptor.name))]
    pub fn register(
        &mut self,
        descriptor: Arc<CommandDescriptor>,
    ) -> Result<(), CommandRegistryError> {
        descriptor.validate()?;

        if self.contains(&descriptor) {
            debug!("Command already registered");
            return Ok(());
        }

        if self
            .commands
            .iter()
            .any(|registered| names_match(&registered.name, &descriptor.name))
        {
            return Err(CommandRegistryError::DuplicateName(descriptor.name.clone()));
        }

        self.commands.push(descriptor);
        Ok(())
    }

    pub fn contains(&self, descriptor: &Arc<CommandDescriptor>) -> bool {
        self.commands
            .iter()
            .any(|registered| Arc::ptr_eq(registered, descriptor))
    }

    /// Looks a command up by its primary name or any alias.
    pub fn find_by_name(&self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.commands
            .iter()
            .find(|descriptor| descriptor.matches_name(name))
            .cloned()
    }

    /// Looks a command up by the name Discord echoes back in interactions.
    pub fn find_by_slash_name(&self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.commands
            .iter()
            .find(|descriptor| descriptor.matches_slash_name(name))
            .cloned()
    }

    pub fn remove(&mut self, descriptor: &Arc<CommandDescriptor>) {
        self.commands
            .retain(|registered| !Arc::ptr_eq(registered, descriptor));
    }

    pub fn all(&self) -> &[Arc<CommandDescriptor>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build_slash_definitions(&self) -> Vec<SlashDefinition> {
        self.commands
            .iter()
            .map(|descriptor| descriptor.to_slash_definition())
            .collect()
    }
}
