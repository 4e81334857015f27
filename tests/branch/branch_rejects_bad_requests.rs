use crate::common::command::{committed_repository_dir, init_repository_dir, run_lgit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn branch_requires_a_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(init_repository_dir.path(), &["branch", "topic"])
        .assert()
        .failure()
        .code(128)
        .stderr(predicate::str::contains(
            "fatal: not a valid object name: 'master'",
        ));

    Ok(())
}

#[rstest]
fn branch_refuses_duplicates(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_lgit_command(dir, &["branch", "topic"]).assert().success();
    run_lgit_command(dir, &["branch", "topic"])
        .assert()
        .failure()
        .code(128)
        .stderr(predicate::str::contains(
            "fatal: a branch named 'topic' already exists",
        ));
    run_lgit_command(dir, &["branch", "master"])
        .assert()
        .failure()
        .code(128);

    Ok(())
}

#[rstest]
#[case("bad..name")]
#[case("ends.lock")]
#[case("has space")]
#[case("trailing/")]
fn branch_rejects_invalid_names(
    committed_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(committed_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .code(128)
        .stderr(predicate::str::contains(format!(
            "'{name}' is not a valid branch name"
        )));

    Ok(())
}
