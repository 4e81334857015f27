use crate::common::command::{committed_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn ls_files_lists_every_tracked_path_from_the_root(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("untracked.txt"), "u".to_string()));

    run_lgit_command(dir, &["ls-files"])
        .assert()
        .success()
        .stdout(predicate::eq("1.txt\na/2.txt\na/b/3.txt\n"));

    Ok(())
}

#[rstest]
fn ls_files_lists_paths_below_the_cwd(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(&committed_repository_dir.path().join("a"), &["ls-files"])
        .assert()
        .success()
        .stdout(predicate::eq("2.txt\nb/3.txt\n"));

    Ok(())
}
