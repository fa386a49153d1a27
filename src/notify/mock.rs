use crate::error::{RelayError, Result};
use crate::notify::Notifier;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A call recorded by [RecordingNotifier]
#[derive(Debug, Clone, PartialEq)]
pub enum SentItem {
    Message { text: String },
    Document { path: PathBuf, caption: String },
}

/// Notifier that records calls instead of talking to a chat service
pub struct RecordingNotifier {
    sent: RefCell<Vec<SentItem>>,
    failure: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier {
            sent: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    /// Notifier whose every call records the attempt, then fails with `description`
    pub fn failing(description: impl Into<String>) -> Self {
        RecordingNotifier {
            sent: RefCell::new(Vec::new()),
            failure: Some(description.into()),
        }
    }

    /// Calls attempted so far
    pub fn sent(&self) -> Vec<SentItem> {
        self.sent.borrow().clone()
    }

    fn record(&self, item: SentItem) -> Result<()> {
        self.sent.borrow_mut().push(item);
        match &self.failure {
            Some(description) => Err(RelayError::remote(description.clone())),
            None => Ok(()),
        }
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn send_message(&self, text: &str) -> Result<()> {
        self.record(SentItem::Message {
            text: text.to_string(),
        })
    }

    fn send_document(&self, path: &Path, caption: &str) -> Result<()> {
        self.record(SentItem::Document {
            path: path.to_path_buf(),
            caption: caption.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.send_message("first").unwrap();
        notifier
            .send_document(Path::new("dist/app.tar.gz"), "second")
            .unwrap();

        assert_eq!(
            notifier.sent(),
            vec![
                SentItem::Message {
                    text: "first".to_string()
                },
                SentItem::Document {
                    path: PathBuf::from("dist/app.tar.gz"),
                    caption: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_recording_notifier_failure() {
        let notifier = RecordingNotifier::failing("Forbidden: bot was blocked by the user");
        let err = notifier.send_message("hi").unwrap_err();
        assert!(err.to_string().contains("bot was blocked"));
        assert_eq!(notifier.sent().len(), 1);
    }
}
