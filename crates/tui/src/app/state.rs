use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    /// The address the view is "showing", standing in for a browser's
    /// address bar.
    pub location: Url,
    pub auth_code: String,
    pub copied: bool,
    pub show_help: bool,
    pub last_error: Option<String>,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
    pub(super) initialized: bool,
    pub(super) flow_epoch: u64,
    pub(super) copy_generation: u64,
    pub(super) copy_reset: Option<CancellationToken>,
    pub(super) listener_cancel: CancellationToken,
    pub(super) navigator: Arc<dyn Navigator>,
    pub(super) clipboard: Arc<dyn ClipboardWriter>,
}

impl App {
    pub fn new(config: Config, location: Url) -> Self {
        Self::with_platform(
            config,
            location,
            Arc::new(SystemBrowser),
            Arc::new(SystemClipboard::new()),
        )
    }

    pub fn with_platform(
        config: Config,
        location: Url,
        navigator: Arc<dyn Navigator>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            config,
            location,
            auth_code: String::new(),
            copied: false,
            show_help: false,
            last_error: None,
            layout: LayoutState::default(),
            keybinds: Keybinds,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
            initialized: false,
            flow_epoch: 0,
            copy_generation: 0,
            copy_reset: None,
            listener_cancel: CancellationToken::new(),
            navigator,
            clipboard,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.auth_code.is_empty() {
            Screen::Connect
        } else {
            Screen::CodeDisplay
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
