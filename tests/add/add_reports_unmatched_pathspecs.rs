use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn add_reports_unmatched_pathspecs(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));

    run_lgit_command(dir, &["add", "missing.txt", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fatal: pathspec 'missing.txt' did not match any files",
        ));

    assert!(read_metadata(dir, "index").ends_with(" a.txt\n"));

    Ok(())
}

#[rstest]
fn add_refuses_paths_outside_the_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["add", "../elsewhere.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fatal: ../elsewhere.txt '../elsewhere.txt' is outside repository",
        ));

    assert!(read_metadata(dir, "index").is_empty());

    Ok(())
}
