use crate::error::{RelayError, Result};
use crate::release::{ReleaseSource, DEFAULT_RELEASE_LIMIT};
use serde::Deserialize;
use std::process::Command;
use tracing::debug;

/// One entry of `gh release list --json tagName`
#[derive(Debug, Deserialize)]
struct ReleaseEntry {
    #[serde(rename = "tagName", default)]
    tag_name: Option<String>,
}

/// Release source backed by the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    limit: u32,
}

impl GhCli {
    /// Use `gh` from `PATH` with the default release limit
    pub fn new() -> Self {
        GhCli {
            program: "gh".to_string(),
            limit: DEFAULT_RELEASE_LIMIT,
        }
    }

    /// Use a specific query program and release limit
    pub fn with_program(program: impl Into<String>, limit: u32) -> Self {
        GhCli {
            program: program.into(),
            limit,
        }
    }

    /// Arguments passed to the query program for `repo`
    pub fn args(&self, repo: &str) -> Vec<String> {
        vec![
            "release".to_string(),
            "list".to_string(),
            "--repo".to_string(),
            repo.to_string(),
            "--limit".to_string(),
            self.limit.to_string(),
            "--json".to_string(),
            "tagName".to_string(),
        ]
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for GhCli {
    fn fetch_tags(&self, repo: &str) -> Result<Vec<String>> {
        let args = self.args(repo);
        debug!(program = %self.program, ?args, "querying releases");

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            RelayError::query(format!("Failed to execute {}: {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let combined = format!("{}{}", stdout, stderr);
            return Err(RelayError::query(format!(
                "{} failed (exit code {}): {}",
                self.program,
                output.status.code().unwrap_or(-1),
                combined.trim()
            )));
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let tags = parse_release_list(&raw)?;
        debug!(count = tags.len(), "releases fetched");
        Ok(tags)
    }
}

/// Extract tag names from the JSON printed by `gh release list --json tagName`.
///
/// Entries without a `tagName`, or with an empty one, are skipped.
pub fn parse_release_list(raw: &str) -> Result<Vec<String>> {
    let entries: Vec<ReleaseEntry> = serde_json::from_str(raw)
        .map_err(|e| RelayError::query(format!("Invalid release list output: {}", e)))?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| entry.tag_name)
        .filter(|name| !name.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gh_args() {
        let gh = GhCli::new();
        assert_eq!(
            gh.args("octo/widgets"),
            vec![
                "release", "list", "--repo", "octo/widgets", "--limit", "100", "--json", "tagName"
            ]
        );
    }

    #[test]
    fn test_gh_args_custom_limit() {
        let gh = GhCli::with_program("/opt/gh/bin/gh", 25);
        assert!(gh.args("octo/widgets").contains(&"25".to_string()));
    }

    #[test]
    fn test_parse_release_list() {
        let raw = r#"[{"tagName":"v1.2"},{"tagName":"v1.1"},{"tagName":"v1.0"}]"#;
        assert_eq!(parse_release_list(raw).unwrap(), vec!["v1.2", "v1.1", "v1.0"]);
    }

    #[test]
    fn test_parse_release_list_empty() {
        assert!(parse_release_list("[]").unwrap().is_empty());
        assert!(parse_release_list("[]\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_release_list_skips_missing_and_empty() {
        let raw = r#"[{"tagName":"v2.0"},{},{"tagName":""},{"tagName":null},{"name":"x"}]"#;
        assert_eq!(parse_release_list(raw).unwrap(), vec!["v2.0"]);
    }

    #[test]
    fn test_parse_release_list_invalid_json() {
        let err = parse_release_list("no releases found").unwrap_err();
        assert!(matches!(err, RelayError::Query(_)));
    }

    #[test]
    fn test_missing_program_is_query_error() {
        let gh = GhCli::with_program("release-relay-no-such-program", 100);
        let err = gh.fetch_tags("octo/widgets").unwrap_err();
        assert!(matches!(err, RelayError::Query(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_query_error() {
        // `false` ignores its arguments and exits 1
        let gh = GhCli::with_program("false", 100);
        let err = gh.fetch_tags("octo/widgets").unwrap_err();
        assert!(err.to_string().contains("exit code 1"));
    }
}
