use crate::error::{RelayError, Result};
use crate::release::DEFAULT_RELEASE_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name searched for in the current and user config directories
pub const CONFIG_FILE_NAME: &str = "release-relay.toml";

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_VAR: &str = "TG_BOT_TOKEN";

/// Environment variable holding the destination chat identifier
pub const CHAT_ID_VAR: &str = "TG_CHAT_ID";

/// Represents the complete configuration for release-relay.
///
/// Holds tunables only. Credentials never come from the file; see [Credentials].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,
}

fn default_gh_program() -> String {
    "gh".to_string()
}

fn default_release_limit() -> u32 {
    DEFAULT_RELEASE_LIMIT
}

/// Settings for the release query tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_gh_program")]
    pub gh_program: String,

    #[serde(default = "default_release_limit")]
    pub limit: u32,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            gh_program: default_gh_program(),
            limit: default_release_limit(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_parse_mode() -> String {
    "MarkdownV2".to_string()
}

fn default_true() -> bool {
    true
}

fn default_message_timeout_secs() -> u64 {
    30
}

fn default_document_timeout_secs() -> u64 {
    180
}

/// Settings for the Telegram Bot API client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TelegramConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,

    #[serde(default = "default_true")]
    pub disable_web_page_preview: bool,

    #[serde(default = "default_message_timeout_secs")]
    pub message_timeout_secs: u64,

    #[serde(default = "default_document_timeout_secs")]
    pub document_timeout_secs: u64,
}

impl TelegramConfig {
    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    pub fn document_timeout(&self) -> Duration {
        Duration::from_secs(self.document_timeout_secs)
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        TelegramConfig {
            api_base: default_api_base(),
            parse_mode: default_parse_mode(),
            disable_web_page_preview: default_true(),
            message_timeout_secs: default_message_timeout_secs(),
            document_timeout_secs: default_document_timeout_secs(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-relay.toml` in current directory
/// 3. `release-relay.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        RelayError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| RelayError::config(format!("Invalid config {}: {}", path.display(), e)))
}

/// Telegram credentials, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; a missing or empty value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String> {
            lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| {
                RelayError::config(format!("Cannot get environment variable: {}", name))
            })
        };

        Ok(Credentials {
            bot_token: require(BOT_TOKEN_VAR)?,
            chat_id: require(CHAT_ID_VAR)?,
        })
    }
}
