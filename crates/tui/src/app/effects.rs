use super::*;
use tracing::{debug, info, warn};

impl App {
    /// Reads the authorization code out of the current location once per
    /// launch.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.adopt_location();
    }

    fn adopt_location(&mut self) {
        match code_from_location(&self.location) {
            Some(code) => {
                info!("Authorization code received ({} chars)", code.len());
                self.cancel_copy_reset();
                self.copied = false;
                self.flow_epoch += 1;
                self.auth_code = code;
                self.location = strip_query(&self.location);
            }
            None => debug!("No authorization code in location"),
        }
    }

    /// Cancels every background task the view owns.
    pub fn shutdown(&mut self) {
        self.cancel_copy_reset();
        self.listener_cancel.cancel();
    }

    fn schedule_copy_reset(&mut self) {
        self.cancel_copy_reset();
        self.copy_generation += 1;

        let generation = self.copy_generation;
        let token = CancellationToken::new();
        self.copy_reset = Some(token.clone());

        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(COPY_FEEDBACK) => {
                        let _ = tx.send(AppAsyncEvent::CopyFlagExpired { generation });
                    }
                }
            });
        }
    }

    pub(super) fn cancel_copy_reset(&mut self) {
        if let Some(token) = self.copy_reset.take() {
            token.cancel();
        }
    }

    /// Binds the loopback callback listener when the redirect URI points at
    /// this machine. Must be called inside a tokio runtime.
    pub fn start_callback_listener(&mut self) {
        if !self.config.callback.listen {
            debug!("Callback listener disabled");
            return;
        }
        let Some(tx) = self.app_async_tx.clone() else {
            return;
        };

        let redirect_uri = self.config.google.redirect_uri.clone();
        let cancel = self.listener_cancel.clone();
        let (location_tx, mut location_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(location) = location_rx.recv().await {
                if tx.send(AppAsyncEvent::CallbackReceived { location }).is_err() {
                    break;
                }
            }
        });

        self.spawn_app_task(async move {
            let server = match CallbackServer::bind(&redirect_uri).await {
                Ok(server) => server,
                Err(e) => {
                    return AppAsyncEvent::CallbackListenerStopped {
                        error: Some(e.to_string()),
                        user_message: Some(e.user_message()),
                    }
                }
            };
            server.run(location_tx, cancel).await;
            AppAsyncEvent::CallbackListenerStopped {
                error: None,
                user_message: None,
            }
        });
    }

    pub fn process_async_events(&mut self) {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        for event in async_events {
            self.apply_async_event(event);
        }
    }

    pub fn apply_async_event(&mut self, event: AppAsyncEvent) {
        match event {
            AppAsyncEvent::ClipboardWritten { epoch, error } => {
                if epoch != self.flow_epoch {
                    debug!("Dropping clipboard result from a previous flow");
                } else if let Some(err) = error {
                    warn!("Clipboard write failed: {}", err);
                } else {
                    self.copied = true;
                    self.schedule_copy_reset();
                }
            }
            AppAsyncEvent::CopyFlagExpired { generation } => {
                if generation == self.copy_generation {
                    self.copied = false;
                    self.copy_reset = None;
                }
            }
            AppAsyncEvent::CallbackReceived { location } => {
                info!("Callback received on {}", location.path());
                self.location = location;
                self.adopt_location();
            }
            AppAsyncEvent::CallbackListenerStopped {
                error,
                user_message,
            } => match (error, user_message) {
                (Some(err), Some(message)) => {
                    warn!("Callback listener stopped: {}", err);
                    self.last_error = Some(message.to_string());
                }
                (Some(err), None) => self.report_error("Callback listener stopped", err),
                _ => debug!("Callback listener stopped"),
            },
        }
    }
}
