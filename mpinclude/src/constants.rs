use regex::Regex;
use std::sync::OnceLock;

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = ".mpinclude.toml";

/// Header rewritten away by default.
pub const DEFAULT_FROM_HEADER: &str = "Python.h";

/// Header included in its place by default.
pub const DEFAULT_TO_HEADER: &str = "micropython.h";

/// Builds the pattern matching a line-leading `#include <header>`.
///
/// Group 1 captures everything before the `<`, leading whitespace included.
/// Group 2 captures the `<header>` token itself.
#[must_use]
pub fn include_pattern(header: &str) -> String {
    format!(r"(?m)^(\s*#\s*include\s*)(<{}>)", regex::escape(header))
}

/// Regex for the default `<Python.h>` include directive.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_python_include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(&include_pattern(DEFAULT_FROM_HEADER))
            .expect("Invalid Python.h include regex pattern")
    })
}
