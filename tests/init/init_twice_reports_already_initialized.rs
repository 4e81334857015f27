use crate::common::command::{init_repository_dir, run_lgit_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_twice_reports_already_initialized(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::eq("Git repository already initialized.\n"));

    // the author configured after the first init survives
    init_repository_dir
        .child(".lgit/config")
        .assert("fake_user\n");

    Ok(())
}
