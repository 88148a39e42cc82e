use std::fmt;

/// Non-fatal findings reported alongside a release check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckWarning {
    /// Tags that are not release versions and were left out of sequencing
    UnparsableTags { tags: Vec<String> },
    /// The release branch contains no release tag yet
    NoReleaseTags { release_branch: String },
    /// HEAD is not on a branch
    DetachedHead,
    /// The working tree has untracked or uncommitted paths
    DirtyWorktree { untracked: usize, uncommitted: usize },
    /// The checkout differs from its remote after a fetch
    OutOfDate,
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckWarning::UnparsableTags { tags } => {
                const SHOWN: usize = 5;
                let mut listed = tags
                    .iter()
                    .take(SHOWN)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                if tags.len() > SHOWN {
                    listed.push_str(&format!(" and {} more", tags.len() - SHOWN));
                }
                write!(
                    f,
                    "Ignored {} tag(s) that are not X.Y.Z versions: {}",
                    tags.len(),
                    listed
                )
            }
            CheckWarning::NoReleaseTags { release_branch } => {
                write!(f, "No release tags found on branch '{}'", release_branch)
            }
            CheckWarning::DetachedHead => write!(f, "HEAD is detached, not on any branch"),
            CheckWarning::DirtyWorktree {
                untracked,
                uncommitted,
            } => write!(
                f,
                "Working tree is not clean ({} untracked, {} uncommitted)",
                untracked, uncommitted
            ),
            CheckWarning::OutOfDate => {
                write!(f, "Repository is out of date with its remote, pull first")
            }
        }
    }
}
