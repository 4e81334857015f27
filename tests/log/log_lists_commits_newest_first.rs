use crate::common::command::{
    AUTHOR, committed_repository_dir, get_head_commit_id, init_repository_dir, lgit_commit,
    run_lgit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_without_commits_explains_itself(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(init_repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "fatal: your current branch 'master' does not have any commits yet\n",
        ));

    Ok(())
}

#[rstest]
fn log_lists_commits_newest_first(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_lgit_command(dir, &["add", "1.txt"]).assert().success();
    lgit_commit(dir, "Second commit\n\nWith a body").assert().success();
    let second = get_head_commit_id(dir)?;

    let output = run_lgit_command(dir, &["log"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], format!("commit {second}"));
    assert_eq!(lines[1], format!("Author: {AUTHOR}"));
    assert!(
        predicate::str::is_match(r"^Date:   \w{3} \w{3} \d{2} \d{2}:\d{2}:\d{2} \d{4}$")?
            .eval(lines[2])
    );
    assert_eq!(
        &lines[3..8],
        &["", "    Second commit", "    ", "    With a body", ""]
    );
    assert_eq!(lines[8], format!("commit {first}"));
    assert_eq!(&lines[11..], &["", "    Initial commit"]);

    Ok(())
}
