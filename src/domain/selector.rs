use crate::domain::tag::TagVersion;
use crate::error::Result;

/// Tag used for a repository that has no releases yet
pub const BOOTSTRAP_TAG: &str = "v1.0";

/// Find the highest tag in a release list.
///
/// Every entry must parse; a single malformed tag fails the whole lookup.
/// Returns `Ok(None)` for an empty list.
pub fn latest_tag<S: AsRef<str>>(tags: &[S]) -> Result<Option<TagVersion>> {
    let mut latest: Option<TagVersion> = None;

    for raw in tags {
        let parsed = TagVersion::parse(raw.as_ref())?;
        if latest.map_or(true, |current| parsed > current) {
            latest = Some(parsed);
        }
    }

    Ok(latest)
}

/// Compute the tag for the next release from the existing release tags.
///
/// # Example
/// ```
/// use release_relay::domain::next_tag;
///
/// assert_eq!(next_tag::<&str>(&[]).unwrap(), "v1.0");
/// assert_eq!(next_tag(&["v1.9", "v2.0", "v1.5"]).unwrap(), "v2.1");
/// ```
pub fn next_tag<S: AsRef<str>>(tags: &[S]) -> Result<String> {
    next_after(latest_tag(tags)?)
}

/// The tag that follows `latest`, or [BOOTSTRAP_TAG] when there is none.
pub fn next_after(latest: Option<TagVersion>) -> Result<String> {
    match latest {
        Some(latest) => Ok(latest.next()?.to_string()),
        None => Ok(BOOTSTRAP_TAG.to_string()),
    }
}
