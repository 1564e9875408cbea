#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Integer,
    Number,
    Boolean,
    User,
    Channel,
    Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashParameter {
    pub name: String,
    pub description: String,
    pub kind: ParameterKind,
    pub required: bool,
}

impl SlashParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Explicit slash command shape. Without a name, the descriptor's primary
/// name is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashSchema {
    pub name: Option<String>,
    pub parameters: Vec<SlashParameter>,
}

impl SlashSchema {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            parameters: Vec::new(),
        }
    }

    pub fn parameter(mut self, parameter: SlashParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashDefinition {
    pub name: String,
    pub description: String,
    pub guild_only: bool,
    pub parameters: Vec<SlashParameter>,
}
