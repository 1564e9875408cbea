use crate::ports::discord::CreateEmbed;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct CreateMessage {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
}

impl CreateMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self::default().content(content)
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.as_deref().map_or(true, str::is_empty) && self.embeds.is_empty()
    }
}

impl From<CreateEmbed> for CreateMessage {
    fn from(embed: CreateEmbed) -> Self {
        Self::default().embed(embed)
    }
}
