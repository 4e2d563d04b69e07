use crate::error::PlatformError;
use std::sync::Mutex;
use url::Url;

/// Sends the operator's browser to a URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url) -> Result<(), PlatformError>;
}

/// Writes text to the system clipboard. Called from a blocking worker.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), PlatformError>;
}

#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &Url) -> Result<(), PlatformError> {
        webbrowser::open(url.as_str())?;
        Ok(())
    }
}

/// Keeps one `arboard::Clipboard` alive so X11/Wayland selections outlive
/// the write call.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| PlatformError::Clipboard("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new()?);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard.set_text(text)?,
            None => return Err(PlatformError::Clipboard("clipboard not initialized".to_string())),
        }
        Ok(())
    }
}
