use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR: &str = "fake_user";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_lgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    run_lgit_command(repository_dir.path(), &["config", "--author", AUTHOR])
        .assert()
        .success();

    repository_dir
}

/// A repository with one commit of `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        init_repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        init_repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        init_repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_lgit_command(init_repository_dir.path(), &["add", "."])
        .assert()
        .success();
    lgit_commit(init_repository_dir.path(), "Initial commit")
        .assert()
        .success();

    init_repository_dir
}

pub fn run_lgit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lgit").expect("Failed to find lgit binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("LGIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn lgit_commit(dir: &Path, message: &str) -> Command {
    run_lgit_command(dir, &["commit", "-m", message])
}

/// Commit id the current branch points at
pub fn get_head_commit_id(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".lgit").join("HEAD"))?;

    match head_content.strip_prefix("ref: ") {
        Some(ref_path) => {
            let ref_file = dir.join(".lgit").join(ref_path.trim());
            Ok(std::fs::read_to_string(ref_file)?.trim().to_string())
        }
        None => Err("HEAD is not a symbolic ref".into()),
    }
}
