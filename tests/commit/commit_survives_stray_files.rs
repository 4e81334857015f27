use crate::common::command::{init_repository_dir, lgit_commit, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::list_metadata_dir;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_survives_stray_files_in_the_history(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join(".lgit/commits/.DS_Store"), "junk".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    run_lgit_command(dir, &["add", "a.txt"]).assert().success();

    lgit_commit(dir, "first").assert().success();

    assert_eq!(list_metadata_dir(dir, "commits").len(), 2);
    run_lgit_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    first\n"));

    Ok(())
}

#[rstest]
fn a_failed_commit_leaves_the_change_staged(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    run_lgit_command(dir, &["add", "a.txt"]).assert().success();
    std::fs::remove_dir(dir.join(".lgit/commits"))?;
    std::fs::write(dir.join(".lgit/commits"), "not a directory")?;

    lgit_commit(dir, "first").assert().failure().code(128);

    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes to be committed:\n        new file:   a.txt\n",
        ));

    std::fs::remove_file(dir.join(".lgit/commits"))?;
    std::fs::create_dir(dir.join(".lgit/commits"))?;
    lgit_commit(dir, "first")
        .assert()
        .success()
        .stdout(predicate::str::contains("(root-commit)"));

    Ok(())
}
