use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use lgit::areas::repository::Repository;
use lgit::artifacts::core::PagerWriter;
use minus::Pager;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status of a command that failed with a fatal error
const FATAL_EXIT_CODE: u8 = 128;

#[derive(Parser)]
#[command(
    name = "lgit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control tool",
    long_about = "lgit keeps file versions in a content-addressed object store, \
    tracks each path through a three-state index (working tree, staged, committed) \
    and records commits as full snapshots of the tracked tree.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command records the current content of the given files in the index. \
        Directories are expanded to every file below them."
    )]
    Add {
        #[arg(index = 1, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Stop tracking files and delete them",
        long_about = "This command removes the given paths from the index and from the working tree. \
        Stored objects are kept."
    )]
    Rm {
        #[arg(index = 1, help = "The files or directories to remove")]
        paths: Vec<String>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status,
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists every commit, newest first."
    )]
    Log,
    #[command(
        name = "ls-files",
        about = "List tracked files",
        long_about = "This command lists the tracked files at or below the current directory."
    )]
    LsFiles,
    #[command(
        name = "config",
        about = "Show or set the commit author",
        long_about = "Without options this command prints the author recorded in new commits."
    )]
    Config {
        #[arg(long, help = "The new author name")]
        author: Option<String>,
    },
    #[command(
        name = "branch",
        about = "List branches or create a new one",
        long_about = "Without a name this command lists the branches and marks the current one. \
        With a name it creates a branch pointing at the current head."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "stash",
        about = "Save copies of changed files",
        long_about = "This command stores every tracked file with staged or unstaged changes \
        without touching the index."
    )]
    Stash {
        #[command(subcommand)]
        action: Option<StashAction>,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command prints the digest of a file and can store its content. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the digest of the object to be specified."
    )]
    CatFile {
        #[arg(index = 1, help = "The object digest to print")]
        sha: String,
    },
}

#[derive(Subcommand)]
enum StashAction {
    #[command(name = "list", about = "List stashes, newest first")]
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LGIT_LOG").unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("fatal: {error:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}

fn run(command: &Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let open = |pwd: &Path| Repository::discover(pwd, Box::new(std::io::stdout()));

    match command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };

            Repository::new(&path, None, Box::new(std::io::stdout()))?.init()
        }
        Commands::Add { paths } => open(&pwd)?.add(paths),
        Commands::Rm { paths } => open(&pwd)?.rm(paths),
        Commands::Status => open(&pwd)?.status(),
        Commands::Commit { message } => open(&pwd)?.commit(message).map(|_| ()),
        Commands::Log => {
            if std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none() {
                let pager = Pager::new();
                let repository =
                    Repository::discover(&pwd, Box::new(PagerWriter::new(pager.clone())))?;
                repository.log()?;
                drop(repository);

                minus::page_all(pager)?;
                Ok(())
            } else {
                open(&pwd)?.log()
            }
        }
        Commands::LsFiles => open(&pwd)?.ls_files(),
        Commands::Config { author } => open(&pwd)?.configure(author.as_deref()),
        Commands::Branch { name } => match name {
            Some(name) => open(&pwd)?.branch(name),
            None => open(&pwd)?.list_branches(),
        },
        Commands::Stash { action } => match action {
            Some(StashAction::List) => open(&pwd)?.stash_list(),
            None => open(&pwd)?.stash(),
        },
        Commands::HashObject { write, file } => open(&pwd)?.hash_object(file, *write),
        Commands::CatFile { sha } => open(&pwd)?.cat_file(sha),
    }
}
