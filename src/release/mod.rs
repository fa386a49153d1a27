//! Release query abstraction layer
//!
//! The next-tag computation only needs the list of tag names a repository
//! has published. This module hides where that list comes from behind the
//! [ReleaseSource] trait:
//!
//! - [gh::GhCli]: runs the GitHub CLI (`gh release list`)
//! - [mock::MockReleaseSource]: fixed tags or a fixed failure, for tests
//!
//! ```rust
//! # use release_relay::release::{MockReleaseSource, ReleaseSource};
//! let source = MockReleaseSource::with_tags(["v1.0", "v1.1"]);
//! let tags = source.fetch_tags("octo/widgets").unwrap();
//! assert_eq!(tags, vec!["v1.0", "v1.1"]);
//! ```

pub mod gh;
pub mod mock;

pub use gh::GhCli;
pub use mock::MockReleaseSource;

use crate::error::Result;

/// Upper bound on the number of releases requested from the query tool
pub const DEFAULT_RELEASE_LIMIT: u32 = 100;

/// Source of published release tag names for a repository
///
/// Implementations return tag names only; empty names are dropped before
/// they reach the caller. Any failure is reported as
/// [crate::error::RelayError::Query] and is fatal to the caller.
pub trait ReleaseSource {
    /// List the tag names of the repository's published releases
    ///
    /// # Arguments
    /// * `repo` - Repository identifier, `owner/repo`
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in whatever order the source reports them
    /// * `Err` - If the query could not be run or reported a failure
    fn fetch_tags(&self, repo: &str) -> Result<Vec<String>>;
}
