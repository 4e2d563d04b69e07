use super::*;
use tracing::info;

impl App {
    pub fn connect(&mut self) {
        if !self.auth_code.is_empty() {
            return;
        }

        let url = match authorization_url(&self.config.google) {
            Ok(url) => url,
            Err(e) => {
                self.report_error("Failed to build authorization URL", e);
                return;
            }
        };

        info!("Opening Google consent page");
        match self.navigator.navigate(&url) {
            Ok(()) => self.clear_error(),
            Err(e) => self.report_error("Could not open a browser", format!("{e}. Open {url}")),
        }
    }

    pub fn copy_code(&mut self) {
        if self.auth_code.is_empty() {
            return;
        }

        let clipboard = self.clipboard.clone();
        let code = self.auth_code.clone();
        let epoch = self.flow_epoch;
        self.spawn_app_task(async move {
            let result = tokio::task::spawn_blocking(move || clipboard.write_text(&code)).await;
            let error = match result {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(e.to_string()),
                Err(e) => Some(e.to_string()),
            };
            AppAsyncEvent::ClipboardWritten { epoch, error }
        });
    }

    pub fn reset(&mut self) {
        info!("Starting over");
        self.auth_code.clear();
        self.copied = false;
        self.flow_epoch += 1;
        self.cancel_copy_reset();
        self.clear_error();
    }
}
