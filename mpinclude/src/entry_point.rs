use crate::cli::Cli;
use crate::config::Config;
use crate::include::{rewrite_files, IncludeRule, RewriteOptions};
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::io::Write;

/// Runs the rewriter with the given arguments.
///
/// # Errors
///
/// Returns an error if configuration is invalid or any file fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the rewriter, writing output to the specified writer.
///
/// Returns the process exit code for argument problems and success. File
/// errors are returned as `Err` after the files before them have been
/// written; files after the failing one are left untouched.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a file cannot be read,
/// decoded, or written, or writing to `writer` fails.
pub fn run_with_args_to<W: Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["mpinclude".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => match cli.paths.first() {
            Some(path) => Config::load_from_path(path)?,
            None => Config::default(),
        },
    };

    let from_header = cli
        .from_header
        .as_deref()
        .unwrap_or_else(|| config.mpinclude.from_header());
    let to_header = cli
        .to_header
        .as_deref()
        .unwrap_or_else(|| config.mpinclude.to_header());
    let rule = IncludeRule::new(from_header, to_header)?;

    let options = RewriteOptions {
        dry_run: cli.dry_run,
        skip_unchanged: !cli.always_write && config.mpinclude.skip_unchanged(),
    };
    let report = cli.verbose || cli.dry_run;

    if cli.verbose {
        if let Some(path) = &config.config_file_path {
            writeln!(writer, "Using config {}", path.display())?;
        }
    }
    if cli.dry_run {
        output::print_dry_run_header(writer)?;
    }

    let summary = rewrite_files(&cli.paths, &rule, options, |outcome| {
        if report {
            output::print_file_outcome(&mut *writer, outcome, cli.dry_run)?;
        }
        Ok(())
    })?;

    if report {
        output::print_summary(writer, &summary, cli.dry_run)?;
    }
    writer.flush()?;

    Ok(0)
}
