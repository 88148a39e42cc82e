//! Parsers for the text printed by the git commands release-check relies on.
//!
//! Nothing here runs git; callers hand over captured stdout.

use std::collections::HashSet;

/// Working tree state as reported by `git status --porcelain`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    /// Paths git does not track
    pub untracked: Vec<String>,
    /// Paths with staged or unstaged changes
    pub uncommitted: Vec<String>,
}

impl WorktreeStatus {
    pub fn is_clean(&self) -> bool {
        self.untracked.is_empty() && self.uncommitted.is_empty()
    }
}

/// Parse `git tag -l` output into tag names, keeping first occurrences
pub fn parse_tag_list(stdout: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Parse `git branch --contains <tag>` output into branch names.
///
/// Current-branch (`*`) and other-worktree (`+`) markers are stripped.
/// Detached HEAD entries such as `(HEAD detached at 1.0.0)` and symbolic refs
/// such as `remotes/origin/HEAD -> origin/main` are skipped.
pub fn parse_branch_contains(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let name = line.trim_start_matches(['*', '+']).trim();
            if name.is_empty() || name.starts_with('(') || name.contains(" -> ") {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

/// Parse `git rev-parse --abbrev-ref HEAD` output.
///
/// Returns `None` on a detached HEAD, where git prints `HEAD`.
pub fn parse_current_branch(stdout: &str) -> Option<String> {
    match stdout.trim() {
        "" | "HEAD" => None,
        name => Some(name.to_string()),
    }
}

/// Parse `git status --porcelain` output.
///
/// Each entry is a two-letter `XY` code, a space and the path. `??` marks an
/// untracked path; any other code means the path has uncommitted changes.
/// Renames (`R  old -> new`) are reported under the new path.
pub fn parse_porcelain_status(stdout: &str) -> WorktreeStatus {
    let mut status = WorktreeStatus::default();

    for line in stdout.lines() {
        if line.trim().is_empty() || line.len() < 4 || !line.is_char_boundary(2) {
            continue;
        }

        let (code, rest) = line.split_at(2);
        let path = rest.trim_start();
        let path = path.rsplit(" -> ").next().unwrap_or(path).to_string();

        if code == "??" {
            status.untracked.push(path);
        } else if code != "!!" {
            status.uncommitted.push(path);
        }
    }

    status
}

/// Interpret the exit status of `git diff --quiet` run after `git fetch`.
///
/// `0` means no differences, `1` means the checkout is behind or has diverged.
/// Any other status is a git failure and tells nothing about the checkout.
pub fn parse_diff_exit_status(code: i32) -> Option<bool> {
    match code {
        0 => Some(true),
        1 => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_list() {
        let out = "1.0.0\n1.1.0\n\nnightly\n1.0.0\n";
        assert_eq!(parse_tag_list(out), vec!["1.0.0", "1.1.0", "nightly"]);
    }

    #[test]
    fn test_parse_tag_list_empty() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list("\n\n").is_empty());
    }

    #[test]
    fn test_parse_branch_contains() {
        let out = "* main\n  develop\n+ feature/x\n  remotes/origin/HEAD -> origin/main\n  remotes/origin/main\n";
        assert_eq!(
            parse_branch_contains(out),
            vec!["main", "develop", "feature/x", "remotes/origin/main"]
        );
    }

    #[test]
    fn test_parse_branch_contains_detached() {
        let out = "* (HEAD detached at 1.0.0)\n  main\n";
        assert_eq!(parse_branch_contains(out), vec!["main"]);
    }

    #[test]
    fn test_parse_current_branch() {
        assert_eq!(parse_current_branch("main\n"), Some("main".to_string()));
        assert_eq!(parse_current_branch("HEAD\n"), None);
        assert_eq!(parse_current_branch(""), None);
    }

    #[test]
    fn test_parse_porcelain_status() {
        let out = " M src/lib.rs\nA  src/new.rs\n?? notes.txt\nR  old.rs -> renamed.rs\n!! target/\n";
        let status = parse_porcelain_status(out);

        assert_eq!(status.untracked, vec!["notes.txt"]);
        assert_eq!(
            status.uncommitted,
            vec!["src/lib.rs", "src/new.rs", "renamed.rs"]
        );
        assert!(!status.is_clean());
    }

    #[test]
    fn test_parse_porcelain_status_clean() {
        assert!(parse_porcelain_status("").is_clean());
    }

    #[test]
    fn test_parse_diff_exit_status() {
        assert_eq!(parse_diff_exit_status(0), Some(true));
        assert_eq!(parse_diff_exit_status(1), Some(false));
        assert_eq!(parse_diff_exit_status(128), None);
    }
}
