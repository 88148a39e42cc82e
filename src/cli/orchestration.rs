//! Release check workflow
//!
//! Gathers repository facts from a [RepositorySource], runs the tag
//! classifier and sequence evaluator over them and collects everything the
//! CLI reports. Kept apart from `main.rs` so the workflow can be driven
//! without clap.

use tracing::{debug, info};

use crate::analyzer::{unparsable_tags, SequenceEvaluator, TagClassifier};
use crate::boundary::CheckWarning;
use crate::config::{BehaviorConfig, Config};
use crate::domain::{
    ConflictStatus, ReleaseContext, SequenceStatus, SequenceVerdict, TagSet, Version,
};
use crate::error::Result;
use crate::git::{RepositorySource, WorktreeStatus};

/// Arguments for the release check workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Requested release version, as typed
    pub candidate: String,

    /// Overrides the configured release branch
    pub release_branch: Option<String>,
}

/// Everything found while checking one candidate version
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseReport {
    pub candidate: String,

    /// Candidate is a well-formed X.Y.Z version
    pub format_valid: bool,

    pub verdict: SequenceVerdict,

    pub context: ReleaseContext,

    pub tags: TagSet,

    pub worktree: WorktreeStatus,

    /// Checkout matches its remote, `None` when not checked
    pub up_to_date: Option<bool>,

    pub warnings: Vec<CheckWarning>,
}

impl ReleaseReport {
    /// Highest release tag on the release branch
    pub fn latest_release(&self) -> Option<&str> {
        self.tags.latest_release().map(|tag| tag.name.as_str())
    }

    /// Check whether the candidate may be released under `behavior`
    pub fn is_releasable(&self, behavior: &BehaviorConfig) -> bool {
        let sequence_ok = match self.verdict.sequence {
            SequenceStatus::Ok => true,
            SequenceStatus::Caution => behavior.allow_caution,
            SequenceStatus::Invalid | SequenceStatus::Unknown => false,
        };

        self.format_valid
            && sequence_ok
            && self.verdict.conflict == ConflictStatus::NoConflict
            && (behavior.allow_dirty_worktree || self.worktree.is_clean())
            && self.up_to_date != Some(false)
    }
}

/// Run a release check for `args.candidate` against `repo`
pub fn run_release_check<R: RepositorySource>(
    repo: &R,
    args: &CheckArgs,
    config: &Config,
) -> Result<ReleaseReport> {
    let release_branch = args
        .release_branch
        .clone()
        .unwrap_or_else(|| config.release_branch.clone());

    let raw_tags = repo.list_tags()?;
    let membership = repo.branch_membership(&raw_tags)?;
    let context = ReleaseContext::new(release_branch, repo.current_branch()?);
    let worktree = repo.worktree_status()?;
    let up_to_date = repo.is_up_to_date()?;

    let tags =
        TagClassifier::new(context.release_branch.as_str()).classify(&raw_tags, &membership);
    let verdict = SequenceEvaluator::new(&context).evaluate(&args.candidate, &tags);

    let mut warnings = Vec::new();

    let skipped = unparsable_tags(&raw_tags);
    if !skipped.is_empty() {
        warnings.push(CheckWarning::UnparsableTags { tags: skipped });
    }
    if tags.main().is_empty() {
        warnings.push(CheckWarning::NoReleaseTags {
            release_branch: context.release_branch.clone(),
        });
    }
    if context.current_branch.is_none() {
        warnings.push(CheckWarning::DetachedHead);
    }
    if !worktree.is_clean() {
        warnings.push(CheckWarning::DirtyWorktree {
            untracked: worktree.untracked.len(),
            uncommitted: worktree.uncommitted.len(),
        });
    }
    if up_to_date == Some(false) {
        warnings.push(CheckWarning::OutOfDate);
    }

    // the UI prints warnings; only trace them here
    for warning in &warnings {
        debug!("{}", warning);
    }
    info!(
        "Checked '{}' against {} release tags: sequence={}, conflict={}",
        args.candidate,
        tags.all().len(),
        verdict.sequence,
        verdict.conflict
    );

    Ok(ReleaseReport {
        candidate: args.candidate.clone(),
        format_valid: Version::parse(&args.candidate).is_ok(),
        verdict,
        context,
        tags,
        worktree,
        up_to_date,
        warnings,
    })
}
