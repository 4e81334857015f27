use crate::common::command::{init_repository_dir, run_lgit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn add_without_arguments_hints(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lgit_command(init_repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Nothing specified, nothing added.\nMaybe you wanted to say 'lgit add .'?\n",
        ));

    Ok(())
}
