use crate::domain::version::Version;
use crate::error::Result;

/// A git tag whose name is a release version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub version: Version,
}

impl ReleaseTag {
    /// Parse a tag name as a release tag
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = Version::parse(&name)?;
        Ok(ReleaseTag { name, version })
    }
}

/// Release tags of a repository, split by reachability from the release branch.
///
/// `main` and `other` partition `all`, and all three lists are sorted
/// ascending by version. Built by
/// [`TagClassifier`](crate::analyzer::TagClassifier).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    all: Vec<ReleaseTag>,
    main: Vec<ReleaseTag>,
    other: Vec<ReleaseTag>,
}

impl TagSet {
    /// Build a tag set from an already disjoint split
    pub(crate) fn from_partition(mut main: Vec<ReleaseTag>, mut other: Vec<ReleaseTag>) -> Self {
        // stable sort keeps discovery order for equal versions
        main.sort_by(|a, b| a.version.cmp(&b.version));
        other.sort_by(|a, b| a.version.cmp(&b.version));

        let mut all: Vec<ReleaseTag> = main.iter().chain(other.iter()).cloned().collect();
        all.sort_by(|a, b| a.version.cmp(&b.version));

        TagSet { all, main, other }
    }

    /// Every release tag, ascending
    pub fn all(&self) -> &[ReleaseTag] {
        &self.all
    }

    /// Tags reachable from the release branch, ascending
    pub fn main(&self) -> &[ReleaseTag] {
        &self.main
    }

    /// Tags not reachable from the release branch, ascending
    pub fn other(&self) -> &[ReleaseTag] {
        &self.other
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Highest tag on the release branch
    pub fn latest_release(&self) -> Option<&ReleaseTag> {
        self.main.last()
    }

    /// Check whether a tag with exactly this name exists
    pub fn contains_name(&self, name: &str) -> bool {
        self.all.iter().any(|tag| tag.name == name)
    }
}
