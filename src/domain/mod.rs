//! Domain logic - pure release rules independent of how git data is obtained

pub mod branch;
pub mod tag;
pub mod verdict;
pub mod version;

pub use branch::{ReleaseContext, DEFAULT_RELEASE_BRANCH};
pub use tag::{ReleaseTag, TagSet};
pub use verdict::{ConflictStatus, SequenceStatus, SequenceVerdict};
pub use version::Version;
