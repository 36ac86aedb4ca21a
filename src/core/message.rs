use serde::{Deserialize, Serialize};

/// Text shown in place of a reply whenever an exchange fails for any reason.
pub const EXCHANGE_ERROR_TEXT: &str = "Lo siento, ha ocurrido un error.";

/// Text of the transient bubble shown while a reply is pending.
pub const TYPING_PLACEHOLDER_TEXT: &str = "Escribiendo...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    pub fn is_user(self) -> bool {
        self == Sender::User
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// The generic reply used when an exchange could not produce one.
    pub fn exchange_error() -> Self {
        Self::bot(EXCHANGE_ERROR_TEXT)
    }

    pub fn is_user(&self) -> bool {
        self.sender.is_user()
    }
}
