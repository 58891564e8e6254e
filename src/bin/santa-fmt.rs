// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! Thin CLI wrapper over the `santa_fmt` library (§6.2).

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use santa_fmt::FormatError;

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Parser)]
#[command(
    name = "santa-fmt",
    about = "An opinionated code formatter for santa-lang",
    disable_version_flag = true
)]
struct Cli {
    /// Rewrite each file in place instead of printing it.
    #[arg(short = 'w')]
    write: bool,
    /// Print the path of each file whose formatted form differs from its source.
    #[arg(short = 'l')]
    list: bool,
    /// Print a diff for each file whose formatted form differs from its source.
    #[arg(short = 'd')]
    diff: bool,
    /// Print the version and exit.
    #[arg(short = 'v', long = "version")]
    version: bool,
    /// Files or directories to format. Reads stdin when omitted.
    paths: Vec<PathBuf>,
}

#[derive(Debug)]
enum CliError {
    Format(FormatError),
    Io(io::Error),
    TooLarge,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Format(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "io-error: {e}"),
            CliError::TooLarge => write!(f, "io-error: file exceeds the 10 MiB size cap"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        CliError::Format(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

enum FileOutcome {
    Unchanged,
    Differs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    if cli.version {
        println!("santa-fmt {}", env!("CARGO_PKG_VERSION"));
        return 0;
    }
    if cli.write && cli.paths.is_empty() {
        eprintln!("santa-fmt: -w requires at least one file path (stdin cannot be rewritten in place)");
        return 2;
    }
    if cli.paths.is_empty() {
        return run_stdin(&cli);
    }

    let mut files = Vec::new();
    for path in &cli.paths {
        collect_files(path, &mut files);
    }

    let mut had_diff = false;
    let mut had_error = false;
    for file in files {
        match process_file(&file, &cli) {
            Ok(FileOutcome::Unchanged) => {}
            Ok(FileOutcome::Differs) => had_diff = true,
            Err(e) => {
                eprintln!("{}: {e}", file.display());
                had_error = true;
            }
        }
    }

    if had_error {
        1
    } else if had_diff && (cli.list || cli.diff) {
        1
    } else {
        0
    }
}

fn run_stdin(cli: &Cli) -> i32 {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("santa-fmt: io-error: {e}");
        return 1;
    }
    match santa_fmt::format(&source) {
        Ok(formatted) => {
            let differs = formatted != source;
            if cli.list {
                if differs {
                    println!("<stdin>");
                }
                return differs as i32;
            }
            if cli.diff {
                if differs {
                    print_diff(Path::new("<stdin>"), &source, &formatted);
                }
                return differs as i32;
            }
            print!("{formatted}");
            0
        }
        Err(e) => {
            eprintln!("<stdin>: {e}");
            1
        }
    }
}

/// Recurses into directories, keeping files whose basename ends with `.santa` and doesn't start
/// with `.`. A file named explicitly on the command line is always kept, filter or no.
fn collect_files(path: &Path, out: &mut Vec<PathBuf>) {
    if !path.is_dir() {
        out.push(path.to_path_buf());
        return;
    }
    let mut stack = vec![path.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let entry_path = entry.path();
            if entry_path.is_dir() {
                stack.push(entry_path);
                continue;
            }
            let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if name.ends_with(".santa") {
                out.push(entry_path);
            }
        }
    }
}

fn process_file(path: &Path, cli: &Cli) -> Result<FileOutcome, CliError> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(CliError::TooLarge);
    }
    let source = fs::read_to_string(path)?;
    let formatted = santa_fmt::format(&source)?;

    if formatted == source {
        if !cli.write && !cli.list && !cli.diff {
            print!("{formatted}");
        }
        return Ok(FileOutcome::Unchanged);
    }

    if cli.write {
        fs::write(path, &formatted)?;
    } else if cli.list {
        println!("{}", path.display());
    } else if cli.diff {
        print_diff(path, &source, &formatted);
    } else {
        print!("{formatted}");
    }
    Ok(FileOutcome::Differs)
}

/// A simplified unified diff: common prefix/suffix lines are trimmed, and the remaining
/// differing span is printed as a single hunk.
fn print_diff(path: &Path, old: &str, new: &str) {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let mut prefix = 0;
    while prefix < old_lines.len() && prefix < new_lines.len() && old_lines[prefix] == new_lines[prefix] {
        prefix += 1;
    }
    let mut suffix = 0;
    while suffix < old_lines.len() - prefix
        && suffix < new_lines.len() - prefix
        && old_lines[old_lines.len() - 1 - suffix] == new_lines[new_lines.len() - 1 - suffix]
    {
        suffix += 1;
    }
    let old_mid = &old_lines[prefix..old_lines.len() - suffix];
    let new_mid = &new_lines[prefix..new_lines.len() - suffix];

    println!("diff {}", path.display());
    println!("--- {}", path.display());
    println!("+++ {}", path.display());
    println!(
        "@@ -{},{} +{},{} @@",
        prefix + 1,
        old_mid.len(),
        prefix + 1,
        new_mid.len()
    );
    for line in old_mid {
        println!("-{line}");
    }
    for line in new_mid {
        println!("+{line}");
    }
}
