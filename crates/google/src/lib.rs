pub mod authorize;
pub mod callback;
pub mod error;
pub mod platform;

pub use authorize::{authorization_url, GoogleConfig, Scope, AUTHORIZATION_ENDPOINT};
pub use error::{CallbackError, PlatformError};
pub use platform::{ClipboardWriter, Navigator, SystemBrowser, SystemClipboard};
