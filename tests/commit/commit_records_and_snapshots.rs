use crate::common::command::{
    AUTHOR, committed_repository_dir, get_head_commit_id, init_repository_dir, lgit_commit,
    run_lgit_command,
};
use crate::common::file::{FileSpec, digest, write_file};
use crate::common::{list_metadata_dir, read_metadata};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn root_commit_writes_a_record_and_a_snapshot(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_lgit_command(dir, &["add", "a.txt"]).assert().success();

    lgit_commit(dir, "first line\nsecond line\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) \d{14}\.\d{6}\] first line\n$",
        )?);

    let id = get_head_commit_id(dir)?;
    assert_eq!(list_metadata_dir(dir, "commits"), vec![id.clone()]);

    let record = read_metadata(dir, &format!("commits/{id}"));
    let lines = record.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], AUTHOR);
    assert_eq!(lines[1], &id[..14]);
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "");
    assert_eq!(&lines[4..], &["first line", "second line"]);

    assert_eq!(
        read_metadata(dir, &format!("snapshots/{id}")),
        format!("{} a.txt\n", digest("hello"))
    );

    Ok(())
}

#[rstest]
fn later_commits_link_their_parent_and_snapshot_the_whole_tree(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let root = get_head_commit_id(dir)?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_lgit_command(dir, &["add", "1.txt"]).assert().success();
    lgit_commit(dir, "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[master "))
        .stdout(predicate::str::contains("root-commit").not());

    let second = get_head_commit_id(dir)?;
    assert!(second > root);

    let record = read_metadata(dir, &format!("commits/{second}"));
    assert_eq!(record.lines().nth(2), Some(root.as_str()));

    let snapshot = read_metadata(dir, &format!("snapshots/{second}"));
    assert_eq!(
        snapshot.lines().collect::<Vec<_>>(),
        vec![
            format!("{} 1.txt", digest("uno")),
            format!("{} a/2.txt", digest("two")),
            format!("{} a/b/3.txt", digest("three")),
        ]
    );

    // committed column now matches the staged one for every row
    for row in read_metadata(dir, "index").lines().filter(|row| !row.is_empty()) {
        assert_eq!(&row[56..96], &row[97..137]);
    }

    Ok(())
}
