//! Tag set domain types

mod tag_set;

pub use tag_set::{InitFlags, TagSet, DEFAULT_TAGS_KEY};
