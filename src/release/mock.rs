use crate::error::{RelayError, Result};
use crate::release::ReleaseSource;
use std::cell::RefCell;

/// Mock release source for testing without running the query tool
pub struct MockReleaseSource {
    tags: Vec<String>,
    failure: Option<String>,
    requested: RefCell<Vec<String>>,
}

impl MockReleaseSource {
    /// Create a source reporting no releases
    pub fn new() -> Self {
        MockReleaseSource {
            tags: Vec::new(),
            failure: None,
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Create a source reporting the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockReleaseSource {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }

    /// Create a source whose query always fails with `output`
    pub fn failing(output: impl Into<String>) -> Self {
        MockReleaseSource {
            failure: Some(output.into()),
            ..Self::new()
        }
    }

    /// Repositories queried so far
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for MockReleaseSource {
    fn fetch_tags(&self, repo: &str) -> Result<Vec<String>> {
        self.requested.borrow_mut().push(repo.to_string());

        if let Some(output) = &self.failure {
            return Err(RelayError::query(output.clone()));
        }

        Ok(self
            .tags
            .iter()
            .filter(|t| !t.is_empty())
            .cloned()
            .collect())
    }
}
