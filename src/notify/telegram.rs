use crate::config::{Credentials, TelegramConfig};
use crate::error::{RelayError, Result};
use crate::notify::{ApiResponse, DocumentPayload, MessagePayload, Notifier};
use reqwest::blocking::{multipart, Client, Response};
use reqwest::StatusCode;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Telegram Bot API client bound to one bot and one chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    credentials: Credentials,
    config: TelegramConfig,
    http: Client,
}

impl TelegramClient {
    pub fn new(credentials: Credentials, config: TelegramConfig) -> Result<Self> {
        let http = Client::builder().build().map_err(RelayError::http)?;
        Ok(TelegramClient {
            credentials,
            config,
            http,
        })
    }

    /// Endpoint URL for a Bot API method
    pub fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.credentials.bot_token,
            method
        )
    }

    pub fn message_payload(&self, text: &str) -> MessagePayload {
        MessagePayload {
            chat_id: self.credentials.chat_id.clone(),
            parse_mode: self.config.parse_mode.clone(),
            disable_web_page_preview: self.config.disable_web_page_preview,
            text: text.to_string(),
        }
    }

    pub fn document_payload(&self, caption: &str) -> DocumentPayload {
        DocumentPayload {
            chat_id: self.credentials.chat_id.clone(),
            parse_mode: self.config.parse_mode.clone(),
            disable_web_page_preview: self.config.disable_web_page_preview,
            caption: caption.to_string(),
        }
    }
}

impl Notifier for TelegramClient {
    fn send_message(&self, text: &str) -> Result<()> {
        debug!(method = "sendMessage", chars = text.chars().count(), "sending");

        let resp = self
            .http
            .post(self.method_url("sendMessage"))
            .timeout(self.config.message_timeout())
            .json(&self.message_payload(text))
            .send()
            .map_err(RelayError::http)?;

        check_response("sendMessage", resp)
    }

    fn send_document(&self, path: &Path, caption: &str) -> Result<()> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        debug!(method = "sendDocument", file = %file_name, size = bytes.len(), "sending");

        let mut form = multipart::Form::new();
        for (name, value) in self.document_payload(caption).fields() {
            form = form.text(name, value);
        }
        form = form.part("document", multipart::Part::bytes(bytes).file_name(file_name));

        let resp = self
            .http
            .post(self.method_url("sendDocument"))
            .timeout(self.config.document_timeout())
            .multipart(form)
            .send()
            .map_err(RelayError::http)?;

        check_response("sendDocument", resp)
    }
}

fn check_response(method: &str, resp: Response) -> Result<()> {
    let status = resp.status();
    let body = resp.text().map_err(RelayError::http)?;
    debug!(method, status = status.as_u16(), "response received");
    interpret_response(method, status, &body)
}

/// Decide whether a Bot API call succeeded.
///
/// Both a non-success status and `"ok": false` are failures; the remote
/// `description` is surfaced when present.
pub fn interpret_response(method: &str, status: StatusCode, body: &str) -> Result<()> {
    let parsed: Option<ApiResponse> = serde_json::from_str(body).ok();

    match parsed {
        Some(resp) if resp.ok && status.is_success() => Ok(()),
        Some(resp) => Err(RelayError::remote(format!(
            "{} failed: {}",
            method,
            resp.description
                .unwrap_or_else(|| format!("Unknown error (HTTP {})", status.as_u16()))
        ))),
        None => Err(RelayError::remote(format!(
            "{} failed: HTTP {} with unreadable response",
            method,
            status.as_u16()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> TelegramClient {
        let credentials = Credentials {
            bot_token: "123:abc".to_string(),
            chat_id: "-1001".to_string(),
        };
        let config = TelegramConfig {
            api_base: api_base.to_string(),
            ..TelegramConfig::default()
        };
        TelegramClient::new(credentials, config).unwrap()
    }

    #[test]
    fn test_method_url() {
        let c = client("https://api.telegram.org");
        assert_eq!(
            c.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_method_url_trailing_slash() {
        let c = client("http://localhost:8081/");
        assert_eq!(
            c.method_url("sendDocument"),
            "http://localhost:8081/bot123:abc/sendDocument"
        );
    }

    #[test]
    fn test_message_payload_uses_config() {
        let c = client("https://api.telegram.org");
        let payload = c.message_payload("hello");
        assert_eq!(payload.chat_id, "-1001");
        assert_eq!(payload.parse_mode, "MarkdownV2");
        assert!(payload.disable_web_page_preview);
        assert_eq!(payload.text, "hello");
    }

    #[test]
    fn test_interpret_ok() {
        let body = r#"{"ok":true,"result":{"message_id":7}}"#;
        assert!(interpret_response("sendMessage", StatusCode::OK, body).is_ok());
    }

    #[test]
    fn test_interpret_ok_false_with_description() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let err = interpret_response("sendMessage", StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, RelayError::Remote(_)));
        assert!(err.to_string().contains("sendMessage failed: Bad Request: chat not found"));
    }

    #[test]
    fn test_interpret_ok_false_without_description() {
        let err = interpret_response("sendDocument", StatusCode::OK, r#"{"ok":false}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown error"));
    }

    #[test]
    fn test_interpret_error_status_with_ok_true() {
        let err =
            interpret_response("sendMessage", StatusCode::BAD_GATEWAY, r#"{"ok":true}"#).unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_interpret_non_json() {
        let err = interpret_response("sendMessage", StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
            .unwrap_err();
        assert!(err.to_string().contains("HTTP 502"));
    }
}
