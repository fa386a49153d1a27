use crate::error::{RelayError, Result};
use std::fmt;

/// A `major.minor` release tag such as `v1.4`.
///
/// Ordering is lexicographic: major first, minor breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagVersion {
    pub major: u64,
    pub minor: u64,
}

impl TagVersion {
    /// Create a new tag version
    pub fn new(major: u64, minor: u64) -> Self {
        TagVersion { major, minor }
    }

    /// Parse a tag string (e.g., "v1.2", "V1.2" or "1.2" -> TagVersion(1,2))
    ///
    /// Surrounding whitespace is ignored and at most one leading 'v' or 'V'
    /// is removed before splitting on '.'.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(RelayError::parse("empty tag"));
        }

        let clean_tag = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 2 {
            return Err(RelayError::parse(format!(
                "Invalid tag format: '{}' - expected [v]MAJOR.MINOR",
                tag
            )));
        }

        let major = parts[0].parse::<u64>().map_err(|_| {
            RelayError::parse(format!("Invalid major version in '{}': {}", tag, parts[0]))
        })?;
        let minor = parts[1].parse::<u64>().map_err(|_| {
            RelayError::parse(format!("Invalid minor version in '{}': {}", tag, parts[1]))
        })?;

        Ok(TagVersion { major, minor })
    }

    /// The tag that follows this one.
    ///
    /// Minor rolls over into the next major once it reaches 9.
    pub fn next(&self) -> Result<Self> {
        let overflow = || RelayError::parse(format!("Tag {} cannot be incremented", self));

        if self.minor >= 9 {
            let major = self.major.checked_add(1).ok_or_else(overflow)?;
            Ok(TagVersion { major, minor: 0 })
        } else {
            let minor = self.minor.checked_add(1).ok_or_else(overflow)?;
            Ok(TagVersion {
                major: self.major,
                minor,
            })
        }
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}
