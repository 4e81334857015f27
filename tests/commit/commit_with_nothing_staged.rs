use crate::common::command::{committed_repository_dir, init_repository_dir, lgit_commit};
use crate::common::file::{FileSpec, write_file};
use crate::common::list_metadata_dir;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_in_an_empty_repository_shows_the_status(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    lgit_commit(dir, "nothing")
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits yet"))
        .stdout(predicate::str::contains("nothing to commit"));

    assert!(list_metadata_dir(dir, "commits").is_empty());

    Ok(())
}

#[rstest]
fn unstaged_edits_are_not_committed(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "edited".to_string()));

    lgit_commit(dir, "should not happen")
        .assert()
        .success()
        .stdout(predicate::str::contains("modified:   1.txt"))
        .stdout(predicate::str::contains("no changes added to commit"));

    assert_eq!(list_metadata_dir(dir, "commits").len(), 1);

    Ok(())
}
