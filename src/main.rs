// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

mod cli;

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use deskfind::{find_app_by_name, home_dir, Iter};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Printed,
    NotFound,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let out = BufWriter::new(io::stdout().lock());

    ExitCode::from(exit_status(&cli, run(&cli, home_dir().as_deref(), out)))
}

/// 0 when something was printed or the reader hung up, 1 when the lookup
/// found nothing, 2 for any other failure.
fn exit_status(cli: &Cli, result: Result<Outcome, AppError>) -> u8 {
    match result {
        Ok(Outcome::Printed) => 0,
        Ok(Outcome::NotFound) => {
            tracing::debug!(name = ?cli.name, "no matching application");
            1
        }
        // The reader went away; stop quietly.
        Err(AppError::Write(why)) if why.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(why) => {
            eprintln!("deskfind: {}", why);
            2
        }
    }
}

fn run<W: Write>(cli: &Cli, home: Option<&Path>, mut out: W) -> Result<Outcome, AppError> {
    let paths = cli.search_paths(home);
    tracing::debug!(?paths, "searching");

    let entries = Iter::new(paths).valid_entries();

    match cli.name.as_deref() {
        Some(name) => match find_app_by_name(name, entries) {
            Some(entry) => writeln!(out, "{}", cli.output.format(&entry, &cli.sep))?,
            None => return Ok(Outcome::NotFound),
        },
        None => {
            for entry in entries {
                writeln!(out, "{}", cli.output.format(&entry, &cli.sep))?;
            }
        }
    }

    out.flush()?;
    Ok(Outcome::Printed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.0))
        }
    }

    fn apps_dir() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x.desktop");
        fs::write(&path, "[Desktop Entry]\nName=Foo\nExec=foo-bin\n").unwrap();
        (tmp, path)
    }

    fn cli(args: &[&str]) -> Cli {
        let argv = ["deskfind", "--no-defaults"].iter().chain(args).copied();
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn lookup_prints_match() {
        let (tmp, path) = apps_dir();
        let cli = cli(&["-n", "FOO", "-p", tmp.path().to_str().unwrap()]);
        let mut out = Vec::new();

        let result = run(&cli, None, &mut out);
        assert_eq!(result.as_ref().ok(), Some(&Outcome::Printed));
        assert_eq!(exit_status(&cli, result), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\tFoo\n", path.display())
        );
    }

    #[test]
    fn lookup_without_match_exits_1() {
        let (tmp, _) = apps_dir();
        let cli = cli(&["-n", "bar", "-p", tmp.path().to_str().unwrap()]);
        let mut out = Vec::new();

        let result = run(&cli, None, &mut out);
        assert_eq!(result.as_ref().ok(), Some(&Outcome::NotFound));
        assert_eq!(exit_status(&cli, result), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn closed_stdout_exits_0() {
        let (tmp, _) = apps_dir();
        let cli = cli(&["-p", tmp.path().to_str().unwrap()]);

        let result = run(&cli, None, FailingWriter(io::ErrorKind::BrokenPipe));
        assert!(result.is_err());
        assert_eq!(exit_status(&cli, result), 0);
    }

    #[test]
    fn other_write_errors_exit_2() {
        let (tmp, _) = apps_dir();
        let cli = cli(&["-p", tmp.path().to_str().unwrap()]);

        let result = run(&cli, None, FailingWriter(io::ErrorKind::PermissionDenied));
        assert_eq!(exit_status(&cli, result), 2);
    }

    #[test]
    fn unreadable_search_path_is_skipped() {
        let (tmp, path) = apps_dir();
        let file = tmp.path().join("plain-file");
        fs::write(&file, "").unwrap();
        let cli = cli(&[
            "--output",
            "path",
            "-p",
            file.to_str().unwrap(),
            "-p",
            tmp.path().to_str().unwrap(),
        ]);
        let mut out = Vec::new();

        let result = run(&cli, None, &mut out);
        assert_eq!(exit_status(&cli, result), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", path.display())
        );
    }
}
