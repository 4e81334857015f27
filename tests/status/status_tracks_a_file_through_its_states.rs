use crate::common::command::{
    committed_repository_dir, init_repository_dir, lgit_commit, run_lgit_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_tracks_a_file_through_its_states(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    run_lgit_command(dir, &["add", "a.txt"]).assert().success();
    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changes to be committed:\n        new file:   a.txt\n",
        ));

    lgit_commit(dir, "hello").assert().success();
    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "On branch master\n\nnothing to commit, working tree clean\n",
        ));

    write_file(FileSpec::new(dir.join("a.txt"), "hello!".to_string()));
    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "On branch master\n\
             \n\
             Changes not staged for commit:\n\
             \x20       modified:   a.txt\n\
             \n\
             no changes added to commit\n",
        ));

    run_lgit_command(dir, &["add", "a.txt"]).assert().success();
    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "On branch master\n\
             \n\
             Changes to be committed:\n\
             \x20       modified:   a.txt\n\
             \n",
        ));

    Ok(())
}

#[rstest]
fn status_records_the_working_digest_in_the_index(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));

    run_lgit_command(dir, &["status"]).assert().success();

    let index = read_metadata(dir, "index");
    let row = index
        .lines()
        .find(|row| row.ends_with(" 1.txt"))
        .ok_or("1.txt is not indexed")?;
    let current = &row[15..55];
    let staged = &row[56..96];
    let committed = &row[97..137];

    assert_ne!(current, staged);
    assert_eq!(staged, committed);
    assert_eq!(current, crate::common::file::digest("changed"));

    Ok(())
}

#[rstest]
fn status_reports_deleted_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    std::fs::remove_file(dir.join("a").join("2.txt"))?;

    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted:    a/2.txt"))
        .stdout(predicate::str::contains("no changes added to commit"));

    Ok(())
}
