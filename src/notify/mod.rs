//! Chat notification abstraction layer
//!
//! [Notifier] is the narrow seam between the dispatch logic and the remote
//! chat service:
//!
//! - [telegram::TelegramClient]: Telegram Bot API over HTTPS
//! - [mock::RecordingNotifier]: records what would have been sent, for tests

pub mod mock;
pub mod telegram;

pub use mock::{RecordingNotifier, SentItem};
pub use telegram::TelegramClient;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sends text and files to a fixed chat destination
pub trait Notifier {
    /// Post `text` as a formatted message
    fn send_message(&self, text: &str) -> Result<()>;

    /// Upload the file at `path` with `caption`
    ///
    /// Callers check that the file exists; implementations report a missing
    /// or unreadable file as an I/O error.
    fn send_document(&self, path: &Path, caption: &str) -> Result<()>;
}

/// JSON body of `sendMessage`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePayload {
    pub chat_id: String,
    pub parse_mode: String,
    pub disable_web_page_preview: bool,
    pub text: String,
}

/// Non-file fields of the `sendDocument` multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPayload {
    pub chat_id: String,
    pub parse_mode: String,
    pub disable_web_page_preview: bool,
    pub caption: String,
}

impl DocumentPayload {
    /// Text fields in the order they are written to the form
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("chat_id", self.chat_id.clone()),
            ("parse_mode", self.parse_mode.clone()),
            ("caption", self.caption.clone()),
            (
                "disable_web_page_preview",
                self.disable_web_page_preview.to_string(),
            ),
        ]
    }
}

/// Envelope every Bot API method responds with
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
