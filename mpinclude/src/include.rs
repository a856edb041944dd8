//! Include directive rewriting.
//!
//! An [`IncludeRule`] matches a line-leading `#include <header>` directive,
//! tolerating whitespace before `#`, between `#` and `include`, and before
//! the `<`. Only the `<header>` token is replaced, so every whitespace run in
//! the directive survives unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::constants::{
    get_python_include_re, include_pattern, DEFAULT_FROM_HEADER, DEFAULT_TO_HEADER,
};
use crate::error::{MpIncludeError, Result};
use crate::fix::{ByteRangeRewriter, Edit};

/// A compiled `#include <from>` to `#include "to"` substitution.
#[derive(Debug, Clone)]
pub struct IncludeRule {
    to_header: String,
    pattern: Regex,
}

/// Result of rewriting one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The transformed content.
    pub content: String,
    /// Number of directives replaced.
    pub replacements: usize,
}

impl Rewrite {
    /// Whether any directive was replaced.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

impl Default for IncludeRule {
    fn default() -> Self {
        Self::python_to_micropython()
    }
}

impl IncludeRule {
    /// `#include <Python.h>` becomes `#include "micropython.h"`.
    #[must_use]
    pub fn python_to_micropython() -> Self {
        Self {
            to_header: DEFAULT_TO_HEADER.to_owned(),
            pattern: get_python_include_re().clone(),
        }
    }

    /// Builds a rule for an arbitrary header pair.
    ///
    /// Header names are matched literally.
    ///
    /// # Errors
    ///
    /// Returns [`MpIncludeError::InvalidHeader`] if either header is empty or
    /// contains a line break, angle bracket, or double quote.
    pub fn new(from_header: &str, to_header: &str) -> Result<Self> {
        validate_header(from_header)?;
        validate_header(to_header)?;

        if from_header == DEFAULT_FROM_HEADER {
            let mut rule = Self::python_to_micropython();
            to_header.clone_into(&mut rule.to_header);
            return Ok(rule);
        }

        let pattern = Regex::new(&include_pattern(from_header)).map_err(|_| {
            MpIncludeError::InvalidHeader {
                header: from_header.to_owned(),
            }
        })?;
        Ok(Self {
            to_header: to_header.to_owned(),
            pattern,
        })
    }

    /// One edit per matching directive, covering only the `<header>` token.
    #[must_use]
    pub fn find_edits(&self, source: &str) -> Vec<Edit> {
        let replacement = format!("\"{}\"", self.to_header);
        self.pattern
            .captures_iter(source)
            .filter_map(|caps| caps.get(2))
            .map(|token| Edit::new(token.start(), token.end(), replacement.clone()))
            .collect()
    }

    /// Rewrites every matching directive in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`MpIncludeError::Rewrite`] if the matched ranges cannot be applied,
    /// which regex matches never produce.
    pub fn rewrite(&self, source: &str) -> Result<Rewrite> {
        let edits = self.find_edits(source);
        if edits.is_empty() {
            return Ok(Rewrite {
                content: source.to_owned(),
                replacements: 0,
            });
        }

        let replacements = edits.len();
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edits(edits);
        Ok(Rewrite {
            content: rewriter.apply()?,
            replacements,
        })
    }
}

fn validate_header(header: &str) -> Result<()> {
    let bad = header.trim().is_empty()
        || header
            .chars()
            .any(|c| matches!(c, '\n' | '\r' | '<' | '>' | '"'));
    if bad {
        return Err(MpIncludeError::InvalidHeader {
            header: header.to_owned(),
        });
    }
    Ok(())
}

/// Options controlling how files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Compute the result without touching the file.
    pub dry_run: bool,
    /// Leave files with no matching directive untouched on disk.
    pub skip_unchanged: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            skip_unchanged: true,
        }
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The file processed.
    pub path: PathBuf,
    /// Number of directives replaced (or that would be, in dry-run mode).
    pub replacements: usize,
    /// Whether the file was written back.
    pub written: bool,
}

/// Totals across a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-file outcomes, in argument order.
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    /// Number of files processed.
    #[must_use]
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    /// Number of files with at least one replacement.
    #[must_use]
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.replacements > 0).count()
    }

    /// Number of directives replaced across all files.
    #[must_use]
    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements).sum()
    }
}

/// Reads `path`, rewrites it with `rule`, and writes the result back.
///
/// Content is decoded as UTF-8 and otherwise kept byte for byte, line
/// endings included. The write truncates the original file in place.
///
/// # Errors
///
/// Returns [`MpIncludeError::Read`], [`MpIncludeError::Encoding`], or [`MpIncludeError::Write`] with
/// the offending path.
pub fn rewrite_file(
    path: &Path,
    rule: &IncludeRule,
    options: RewriteOptions,
) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|source| MpIncludeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|source| MpIncludeError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rule.rewrite(&source)?;
    let should_write = !options.dry_run && (rewrite.changed() || !options.skip_unchanged);
    if should_write {
        fs::write(path, rewrite.content.as_bytes()).map_err(|source| MpIncludeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        replacements: rewrite.replacements,
        written: should_write,
    })
}

/// Rewrites each path in order, stopping at the first failure.
///
/// `on_file` sees each outcome as soon as its file is done. Paths after a
/// failing one are not read or written.
///
/// # Errors
///
/// Returns the first error from [`rewrite_file`], or
/// [`MpIncludeError::Report`] if `on_file` fails.
pub fn rewrite_files<P, F>(
    paths: &[P],
    rule: &IncludeRule,
    options: RewriteOptions,
    mut on_file: F,
) -> Result<RunSummary>
where
    P: AsRef<Path>,
    F: FnMut(&FileOutcome) -> std::io::Result<()>,
{
    let mut summary = RunSummary::default();
    for path in paths {
        let outcome = rewrite_file(path.as_ref(), rule, options)?;
        on_file(&outcome).map_err(MpIncludeError::Report)?;
        summary.files.push(outcome);
    }
    Ok(summary)
}
