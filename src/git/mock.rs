use crate::error::Result;
use crate::git::{RepositorySource, WorktreeStatus};
use std::collections::HashMap;

/// Mock repository for testing without captured git output
pub struct MockRepository {
    tags: Vec<String>,
    branches: HashMap<String, Vec<String>>,
    current_branch: Option<String>,
    status: WorktreeStatus,
    up_to_date: Option<bool>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            branches: HashMap::new(),
            current_branch: None,
            status: WorktreeStatus::default(),
            up_to_date: None,
        }
    }

    /// Add a tag contained in the given branches
    pub fn add_tag(&mut self, name: impl Into<String>, branches: &[&str]) {
        let name = name.into();
        self.branches.insert(
            name.clone(),
            branches.iter().map(|b| b.to_string()).collect(),
        );
        self.tags.push(name);
    }

    /// Set the checked out branch
    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = Some(branch.into());
    }

    /// Add an untracked path
    pub fn add_untracked(&mut self, path: impl Into<String>) {
        self.status.untracked.push(path.into());
    }

    /// Add a path with uncommitted changes
    pub fn add_uncommitted(&mut self, path: impl Into<String>) {
        self.status.uncommitted.push(path.into());
    }

    /// Record whether the checkout matches its remote
    pub fn set_up_to_date(&mut self, up_to_date: bool) {
        self.up_to_date = Some(up_to_date);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositorySource for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn branches_containing(&self, tag: &str) -> Result<Vec<String>> {
        Ok(self.branches.get(tag).cloned().unwrap_or_default())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.current_branch.clone())
    }

    fn worktree_status(&self) -> Result<WorktreeStatus> {
        Ok(self.status.clone())
    }

    fn is_up_to_date(&self) -> Result<Option<bool>> {
        Ok(self.up_to_date)
    }
}
