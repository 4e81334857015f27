use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, digest, write_file, write_generated_files};
use crate::common::read_metadata;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let nested = dir.join("a").join("b");
    let generated = write_generated_files(&nested, 3);
    write_file(FileSpec::new(dir.join("top.txt"), "top".to_string()));

    run_lgit_command(dir, &["add", "."]).assert().success();

    let index = read_metadata(dir, "index");
    let mut tracked = index
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line[138..].to_string())
        .collect::<Vec<_>>();
    tracked.sort();

    let mut expected = generated
        .iter()
        .map(|spec| {
            spec.path
                .strip_prefix(dir)
                .map(|path| path.to_string_lossy().to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;
    expected.push("top.txt".to_string());
    expected.sort();

    assert_eq!(tracked, expected);

    // every staged blob was stored under its sharded digest path
    for spec in &generated {
        let oid = digest(&spec.content);
        assert!(dir.join(".lgit/objects").join(&oid[..2]).join(&oid[2..]).is_file());
    }

    Ok(())
}

#[rstest]
fn index_lines_use_the_fixed_width_layout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    run_lgit_command(dir, &["add", "a.txt"]).assert().success();

    let index = read_metadata(dir, "index");
    let line = index.lines().next().ok_or("empty index")?;
    let hello = digest("hello");

    assert!(line[..14].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(&line[15..55], hello);
    assert_eq!(&line[56..96], hello);
    assert_eq!(&line[97..137], " ".repeat(40));
    assert_eq!(&line[138..], "a.txt");

    Ok(())
}
