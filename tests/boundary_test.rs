use release_check::boundary::CheckWarning;

// ============================================================================
// CheckWarning Display Tests
// ============================================================================

#[test]
fn test_unparsable_tags_display() {
    let warning = CheckWarning::UnparsableTags {
        tags: vec!["nightly".to_string(), "v1.0.0".to_string()],
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Ignored 2 tag(s)"),
        "Message should contain the tag count, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("nightly, v1.0.0"),
        "Message should list the tags, got: {}",
        display_msg
    );
}

#[test]
fn test_unparsable_tags_display_truncates_long_lists() {
    let tags: Vec<String> = (0..8).map(|i| format!("build-{}", i)).collect();
    let warning = CheckWarning::UnparsableTags { tags };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("build-4"));
    assert!(!display_msg.contains("build-5"));
    assert!(
        display_msg.ends_with("and 3 more"),
        "Message should summarise the remaining tags, got: {}",
        display_msg
    );
}

#[test]
fn test_no_release_tags_display() {
    let warning = CheckWarning::NoReleaseTags {
        release_branch: "main".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No release tags") && display_msg.contains("'main'"),
        "Message should name the release branch, got: {}",
        display_msg
    );
}

#[test]
fn test_detached_head_display() {
    assert!(CheckWarning::DetachedHead.to_string().contains("detached"));
}

#[test]
fn test_dirty_worktree_display() {
    let warning = CheckWarning::DirtyWorktree {
        untracked: 2,
        uncommitted: 5,
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("2 untracked") && display_msg.contains("5 uncommitted"),
        "Message should contain both counts, got: {}",
        display_msg
    );
}

#[test]
fn test_out_of_date_display() {
    let display_msg = CheckWarning::OutOfDate.to_string();
    assert!(
        display_msg.contains("out of date"),
        "Message should say the repository is out of date, got: {}",
        display_msg
    );
}

#[test]
fn test_warning_equality() {
    assert_eq!(CheckWarning::DetachedHead, CheckWarning::DetachedHead);
    assert_ne!(
        CheckWarning::NoReleaseTags {
            release_branch: "main".to_string()
        },
        CheckWarning::NoReleaseTags {
            release_branch: "trunk".to_string()
        }
    );
}
