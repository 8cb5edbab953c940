use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Route the front end should navigate to after showing this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub navigate_to: Option<String>,
}

/// Engine output. Always authored by the assistant.
pub type ChatReply = ChatMessage;

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            navigate_to: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            navigate_to: None,
        }
    }

    /// Attach a navigation directive. Blank routes are dropped.
    pub fn with_navigation(mut self, navigate_to: Option<String>) -> Self {
        self.navigate_to = navigate_to.filter(|route| !route.trim().is_empty());
        self
    }
}

/// Conversation payload posted by the web front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// The most recent message authored by the user, if any.
    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == Role::User)
    }
}
