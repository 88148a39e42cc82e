pub mod sequence;
pub mod tag_classifier;

pub use sequence::{is_minor_dominant, SequenceEvaluator};
pub use tag_classifier::{unparsable_tags, BranchMembership, TagClassifier};
