use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn add_follows_symlinked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("real.txt"), "real".to_string()));
    std::os::unix::fs::symlink(dir.join("real.txt"), dir.join("link.txt"))?;

    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Untracked files:\n        link.txt\n        real.txt\n",
        ));

    run_lgit_command(dir, &["add", "."]).assert().success();

    run_lgit_command(dir, &["ls-files"])
        .assert()
        .success()
        .stdout(predicate::eq("link.txt\nreal.txt\n"));

    Ok(())
}
