use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopupError {
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("config decode error: {0}")]
    ConfigDecode(#[from] serde_json::Error),

    #[error("dom error: {0}")]
    Dom(String),
}

impl PopupError {
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PopupError>;
