//! Workflow orchestration for both binaries
//!
//! Everything between "arguments parsed" and "result printed" lives here so
//! it can run against the [ReleaseSource] and [Notifier] fakes without a
//! process boundary.

use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{latest_tag, next_after};
use crate::error::{RelayError, Result};
use crate::notify::Notifier;
use crate::release::ReleaseSource;

/// What `tg-notify` was asked to send
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyCommand {
    /// Send the body as a text message
    Message,
    /// Upload a file with the body as its caption
    Document(PathBuf),
}

/// Compute the next tag for `repo` from the releases `source` reports.
///
/// # Arguments
/// * `source` - Where the release list comes from
/// * `repo` - Repository identifier; surrounding whitespace is ignored
///
/// # Returns
/// * `Ok(String)` - The next tag, e.g. `v1.3`
/// * `Err` - Usage error for a blank repository, otherwise the query or parse failure
pub fn run_next_tag(source: &dyn ReleaseSource, repo: &str) -> Result<String> {
    let repo = repo.trim();
    if repo.is_empty() {
        return Err(RelayError::usage("repository must not be empty"));
    }

    let tags = source.fetch_tags(repo)?;
    debug!(repo, count = tags.len(), "release tags fetched");

    let latest = latest_tag(&tags)?;
    if let Some(latest) = latest {
        info!(repo, %latest, "latest release");
    }

    next_after(latest)
}

/// Read the message body from `reader`, dropping trailing whitespace.
///
/// An empty body is a usage error.
pub fn read_body<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let body = input.trim_end();
    if body.is_empty() {
        return Err(RelayError::usage("stdin is empty"));
    }
    Ok(body.to_string())
}

/// Validate a notification locally, then hand it to `notifier`.
///
/// An empty body or a missing upload file fails before `notifier` is called.
pub fn dispatch_notification(
    notifier: &dyn Notifier,
    command: &NotifyCommand,
    text: &str,
) -> Result<()> {
    if text.trim_end().is_empty() {
        return Err(RelayError::usage("stdin is empty"));
    }

    match command {
        NotifyCommand::Message => notifier.send_message(text),
        NotifyCommand::Document(path) => {
            if !path.is_file() {
                return Err(RelayError::FileNotFound(path.clone()));
            }
            notifier.send_document(path, text)
        }
    }
}
