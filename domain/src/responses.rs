use crate::ports::discord::{CreateEmbed, CreateMessage};
use std::str::FromStr;
use thiserror::Error;

const ERROR_COLOUR: u32 = 0xED4245;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    English,
    #[default]
    Spanish,
}

#[derive(Debug, Error)]
#[error("Unsupported language `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// User-facing texts the bot sends on its own behalf.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responses {
    language: Language,
}

impl Responses {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn command_not_found(&self) -> CreateMessage {
        let text = match self.language {
            Language::English => "That command does not exist or cannot be used here.",
            Language::Spanish => "Ese comando no existe o no se puede usar aquí.",
        };
        CreateMessage::text(text)
    }

    pub fn internal_error(&self) -> CreateMessage {
        let (title, description) = match self.language {
            Language::English => (
                "Something went wrong",
                "An error occurred while executing the command. Please try again later.",
            ),
            Language::Spanish => (
                "Algo salió mal",
                "Ha ocurrido un error al ejecutar el comando. Inténtalo de nuevo más tarde.",
            ),
        };
        CreateMessage::from(
            CreateEmbed::default()
                .title(title)
                .description(description)
                .colour(ERROR_COLOUR),
        )
    }
}
