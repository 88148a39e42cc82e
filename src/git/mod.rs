//! Repository data abstraction layer
//!
//! release-check never runs git itself. It reads repository facts (tags, the
//! branches containing each tag, the checked out branch, the working tree
//! status and whether the checkout matches its remote) through the [RepositorySource] trait, so the data can come from
//! captured command output or from an in-memory fixture.
//!
//! # Overview
//!
//! - [snapshot::Snapshot]: captured raw git output stored in a TOML file
//! - [mock::MockRepository]: an in-memory implementation for testing
//! - [output]: parsers turning raw git stdout into typed values
//!
//! ```rust
//! # use release_check::git::{RepositorySource, Snapshot};
//! # fn example() -> release_check::Result<()> {
//! let snapshot = Snapshot::from_toml_str(r#"
//! tags = "1.0.0\n1.1.0\n"
//! current_branch = "main"
//!
//! [contains]
//! "1.0.0" = "* main\n"
//! "1.1.0" = "* main\n"
//! "#)?;
//! assert_eq!(snapshot.list_tags()?, vec!["1.0.0", "1.1.0"]);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod output;
pub mod snapshot;

pub use mock::MockRepository;
pub use output::WorktreeStatus;
pub use snapshot::Snapshot;

use crate::analyzer::BranchMembership;
use crate::error::Result;

/// Source of the repository facts a release check needs
///
/// ## Error Handling
///
/// Methods return [crate::error::Result<T>]. A source that simply has no data
/// for a query (no tags, a tag contained in no branch) returns an empty value
/// rather than an error.
pub trait RepositorySource {
    /// All tag names, in the order the repository reports them
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Names of the branches containing `tag`
    fn branches_containing(&self, tag: &str) -> Result<Vec<String>>;

    /// Checked out branch, `None` on a detached HEAD
    fn current_branch(&self) -> Result<Option<String>>;

    /// Untracked and uncommitted paths in the working tree
    fn worktree_status(&self) -> Result<WorktreeStatus>;

    /// Whether the checkout matches its remote, `None` when unknown
    fn is_up_to_date(&self) -> Result<Option<bool>>;

    /// Branch membership of every tag in `tags`
    fn branch_membership(&self, tags: &[String]) -> Result<BranchMembership> {
        let mut membership = BranchMembership::new();
        for tag in tags {
            membership.insert(tag.clone(), self.branches_containing(tag)?);
        }
        Ok(membership)
    }
}
