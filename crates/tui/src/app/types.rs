use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Connect,
    CodeDisplay,
}

#[derive(Debug)]
pub enum AppAsyncEvent {
    ClipboardWritten {
        epoch: u64,
        error: Option<String>,
    },
    CopyFlagExpired {
        generation: u64,
    },
    CallbackReceived {
        location: Url,
    },
    CallbackListenerStopped {
        error: Option<String>,
        user_message: Option<&'static str>,
    },
}
