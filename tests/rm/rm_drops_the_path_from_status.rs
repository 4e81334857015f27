use crate::common::command::{committed_repository_dir, run_lgit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn rm_drops_the_path_from_status(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_lgit_command(dir, &["rm", "a/2.txt"]).assert().success();

    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "On branch master\n\nnothing to commit, working tree clean\n",
        ))
        .stdout(predicate::str::contains("2.txt").not());

    Ok(())
}
