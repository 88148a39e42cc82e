use crate::domain::{
    ConflictStatus, ReleaseContext, SequenceStatus, SequenceVerdict, TagSet, Version,
};
use tracing::debug;

/// Decides whether a candidate version is a valid next release
pub struct SequenceEvaluator<'a> {
    context: &'a ReleaseContext,
}

impl<'a> SequenceEvaluator<'a> {
    /// Create an evaluator for the given branch context
    pub fn new(context: &'a ReleaseContext) -> Self {
        SequenceEvaluator { context }
    }

    /// Evaluate sequencing and conflict status of `candidate_text`.
    ///
    /// Both statuses are `Unknown` when the candidate is not a version or
    /// there are no tags to compare against. Otherwise the candidate must be
    /// strictly above every tag on its minor line; on the release branch a
    /// candidate below the minor line of the oldest release-branch tag is
    /// flagged `Caution`. Conflict is an exact name match against all tags.
    pub fn evaluate(&self, candidate_text: &str, tags: &TagSet) -> SequenceVerdict {
        let candidate = match Version::parse(candidate_text) {
            Ok(v) => v,
            Err(e) => {
                debug!("Candidate not evaluated: {}", e);
                return SequenceVerdict::unknown();
            }
        };

        if tags.is_empty() {
            debug!("Candidate {} not evaluated: no release tags", candidate);
            return SequenceVerdict::unknown();
        }

        let sequence = if !is_minor_dominant(&candidate, tags) {
            SequenceStatus::Invalid
        } else if self.context.is_on_release_branch()
            && tags
                .main()
                .first()
                .is_some_and(|oldest| candidate.minor < oldest.version.minor)
        {
            SequenceStatus::Caution
        } else {
            SequenceStatus::Ok
        };

        let conflict = if tags.contains_name(candidate_text) {
            ConflictStatus::Conflict
        } else {
            ConflictStatus::NoConflict
        };

        debug!(
            "Candidate {} evaluated: sequence={}, conflict={}",
            candidate, sequence, conflict
        );

        SequenceVerdict { sequence, conflict }
    }
}

/// Candidate is strictly above every tag sharing its minor component
pub fn is_minor_dominant(candidate: &Version, tags: &TagSet) -> bool {
    tags.all()
        .iter()
        .filter(|tag| tag.version.minor == candidate.minor)
        .all(|tag| *candidate > tag.version)
}
