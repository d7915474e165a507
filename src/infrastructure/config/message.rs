//! Message template configuration.

use serde::Deserialize;

use crate::domain::MessageTemplate;

/// Text pieces of the published message.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub title: String,
    pub footer: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        let template = MessageTemplate::default();
        Self {
            title: template.title,
            footer: template.footer,
        }
    }
}

impl From<&MessageConfig> for MessageTemplate {
    fn from(config: &MessageConfig) -> Self {
        Self {
            title: config.title.clone(),
            footer: config.footer.clone(),
        }
    }
}
