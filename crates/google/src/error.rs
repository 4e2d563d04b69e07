use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Browser launch failed: {0}")]
    Browser(#[from] std::io::Error),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

impl From<arboard::Error> for PlatformError {
    fn from(e: arboard::Error) -> Self {
        PlatformError::Clipboard(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("Redirect URI is not a loopback http address: {0}")]
    NotLoopback(String),

    #[error("Failed to bind callback listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out waiting for the callback request")]
    Timeout,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CallbackError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CallbackError::NotLoopback(_) => {
                "Callback listener disabled: redirect URI is not on this machine."
            }
            CallbackError::Bind { .. } => "Callback port is busy. Paste the redirect URL with --location.",
            CallbackError::Timeout => "Callback request timed out.",
            CallbackError::Io(_) => "Callback request failed.",
        }
    }
}
