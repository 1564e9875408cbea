use crate::command::registry::CommandRegistryError;
use crate::command::{Command, SlashDefinition, SlashSchema};
use std::fmt;
use std::sync::Arc;

/// A command together with the metadata it is registered under.
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub slash_schema: Option<SlashSchema>,
    pub handler: Arc<dyn Command + Send + Sync>,
}

impl CommandDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn Command + Send + Sync>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            slash_schema: None,
            handler,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn slash_schema(mut self, schema: SlashSchema) -> Self {
        self.slash_schema = Some(schema);
        self
    }

    pub fn slash_name(&self) -> &str {
        self.slash_schema
            .as_ref()
            .and_then(|schema| schema.name.as_deref())
            .unwrap_or(&self.name)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name) || self.aliases.iter().any(|alias| names_match(alias, name))
    }

    pub fn matches_slash_name(&self, name: &str) -> bool {
        names_match(self.slash_name(), name) || names_match(&self.name, name)
    }

    pub fn validate(&self) -> Result<(), CommandRegistryError> {
        if self.name.trim().is_empty() {
            return Err(CommandRegistryError::InvalidDescriptor(
                "command name is empty".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(CommandRegistryError::InvalidDescriptor(format!(
                "command `{}` has no description",
                self.name
            )));
        }
        Ok(())
    }

    pub fn to_slash_definition(&self) -> SlashDefinition {
        let parameters = self
            .slash_schema
            .as_ref()
            .map(|schema| schema.parameters.clone())
            .unwrap_or_default();

        SlashDefinition {
            name: self.slash_name().to_lowercase(),
            description: self.description.clone(),
            guild_only: true,
            parameters,
        }
    }
}

/// Case-insensitive comparison using the same Unicode lowercasing that
/// produces the uploaded slash name.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("slash_schema", &self.slash_schema)
            .finish_non_exhaustive()
    }
}
