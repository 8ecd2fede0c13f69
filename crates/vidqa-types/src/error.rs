use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Timeout after {0}ms")]
    Timeout(u32),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
