/// Default name of the release branch
pub const DEFAULT_RELEASE_BRANCH: &str = "main";

/// Branch context a release is checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    /// Branch whose tags define the released history
    pub release_branch: String,
    /// Branch currently checked out, `None` on a detached HEAD
    pub current_branch: Option<String>,
}

impl ReleaseContext {
    /// Create a new release context
    pub fn new(release_branch: impl Into<String>, current_branch: Option<String>) -> Self {
        ReleaseContext {
            release_branch: release_branch.into(),
            current_branch,
        }
    }

    /// Check if the checked out branch is the release branch
    pub fn is_on_release_branch(&self) -> bool {
        self.current_branch.as_deref() == Some(self.release_branch.as_str())
    }
}

impl Default for ReleaseContext {
    fn default() -> Self {
        ReleaseContext::new(DEFAULT_RELEASE_BRANCH, None)
    }
}
