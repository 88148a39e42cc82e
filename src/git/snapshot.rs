use crate::error::{ReleaseCheckError, Result};
use crate::git::output::{
    parse_branch_contains, parse_current_branch, parse_diff_exit_status, parse_porcelain_status,
    parse_tag_list,
};
use crate::git::{RepositorySource, WorktreeStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Captured output of the git commands a release check needs.
///
/// Every field holds the raw stdout of one command, except `diff_exit_status`,
/// which holds an exit status:
///
/// ```toml
/// tags = "1.0.0\n1.1.0\n"              # git tag -l
/// current_branch = "main\n"            # git rev-parse --abbrev-ref HEAD
/// status = "?? notes.txt\n"            # git status --porcelain
/// diff_exit_status = 0                 # git fetch && git diff --quiet
///
/// [contains]                           # git branch --contains <tag>
/// "1.0.0" = "* main\n  develop\n"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub current_branch: String,

    #[serde(default)]
    pub status: String,

    /// Absent when the remote was not checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_exit_status: Option<i32>,

    #[serde(default)]
    pub contains: HashMap<String, String>,
}

impl Snapshot {
    /// Parse a snapshot from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ReleaseCheckError::snapshot(format!("Invalid snapshot: {}", e)))
    }

    /// Load a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_toml_str(&content)?;
        debug!(
            "Loaded snapshot from {} ({} tag entries)",
            path.display(),
            snapshot.contains.len()
        );
        Ok(snapshot)
    }
}

impl RepositorySource for Snapshot {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(parse_tag_list(&self.tags))
    }

    fn branches_containing(&self, tag: &str) -> Result<Vec<String>> {
        Ok(self
            .contains
            .get(tag)
            .map(|out| parse_branch_contains(out))
            .unwrap_or_default())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(parse_current_branch(&self.current_branch))
    }

    fn worktree_status(&self) -> Result<WorktreeStatus> {
        Ok(parse_porcelain_status(&self.status))
    }

    fn is_up_to_date(&self) -> Result<Option<bool>> {
        Ok(self.diff_exit_status.and_then(parse_diff_exit_status))
    }
}
