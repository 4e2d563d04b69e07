use crate::keybinds::Keybinds;
use crate::ui::layout::{centered_rect, LayoutState};
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use authcode_google::callback::{code_from_location, strip_query, CallbackServer};
use authcode_google::{
    authorization_url, ClipboardWriter, Navigator, Scope, SystemBrowser, SystemClipboard,
};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use render::api_request_example;
pub use state::App;
pub use types::{AppAsyncEvent, Screen};

/// How long the copy confirmation stays visible.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(3);

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{context}: {error}");
        self.last_error = Some(message.clone());
        tracing::warn!("{message}");
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
