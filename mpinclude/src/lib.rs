//! Core library for the `mpinclude` include rewriter.
//!
//! Rewrites `#include <Python.h>` directives in C sources to include the
//! MicroPython compatibility header instead.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for loading `.mpinclude.toml` configuration.
pub mod config;

/// Module containing shared constants and the default match pattern.
pub mod constants;

/// Module defining the entry point shared by the binary and tests.
pub mod entry_point;

/// Module defining the crate-level error type.
pub mod error;

/// Module for applying byte-range edits to source text.
pub mod fix;

/// Module containing the include directive rule and the file rewriter.
pub mod include;

/// Module for styled CLI output.
pub mod output;

/// Module containing path helpers.
pub mod utils;

pub use error::{MpIncludeError, Result};
pub use include::{
    rewrite_file, rewrite_files, FileOutcome, IncludeRule, RewriteOptions, RunSummary,
};
