//! Domain logic - tag parsing and next-tag selection, independent of how
//! release lists are obtained

pub mod selector;
pub mod tag;

pub use selector::{latest_tag, next_after, next_tag, BOOTSTRAP_TAG};
pub use tag::TagVersion;
