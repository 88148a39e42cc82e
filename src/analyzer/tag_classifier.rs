use crate::domain::{ReleaseTag, TagSet};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Branches containing each tag, keyed by tag name
pub type BranchMembership = HashMap<String, Vec<String>>;

/// Splits repository tags into release-branch tags and the rest
pub struct TagClassifier {
    release_branch: String,
}

impl TagClassifier {
    /// Create a classifier for the given release branch
    pub fn new(release_branch: impl Into<String>) -> Self {
        TagClassifier {
            release_branch: release_branch.into(),
        }
    }

    /// Classify tags by whether the release branch contains them.
    ///
    /// Tags that are not release versions are dropped. A repeated tag name is
    /// classified once, at its first occurrence. Tags missing from
    /// `membership` are treated as contained in no branch.
    pub fn classify(&self, tags: &[String], membership: &BranchMembership) -> TagSet {
        let mut seen = HashSet::new();
        let mut main = Vec::new();
        let mut other = Vec::new();

        for name in tags {
            if !seen.insert(name.as_str()) {
                continue;
            }

            let tag = match ReleaseTag::parse(name.as_str()) {
                Ok(tag) => tag,
                Err(e) => {
                    debug!("Skipping tag '{}': {}", name, e);
                    continue;
                }
            };

            let on_release_branch = membership
                .get(name)
                .is_some_and(|branches| branches.iter().any(|b| *b == self.release_branch));

            if on_release_branch {
                main.push(tag);
            } else {
                other.push(tag);
            }
        }

        debug!(
            "Classified {} release tags ({} on '{}', {} elsewhere)",
            main.len() + other.len(),
            main.len(),
            self.release_branch,
            other.len()
        );

        TagSet::from_partition(main, other)
    }
}

/// Tag names that are not release versions, in discovery order
pub fn unparsable_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter(|name| ReleaseTag::parse(name.as_str()).is_err())
        .cloned()
        .collect()
}
