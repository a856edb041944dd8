//! Path helpers.

use std::path::Path;

/// Normalizes a path for CLI display.
///
/// Backslashes become forward slashes and a leading "./" is dropped.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use mpinclude::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\module.c")), "src/module.c");
/// assert_eq!(normalize_display_path(Path::new("./build/gen.c")), "build/gen.c");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(normalize_display_path(Path::new("a/b.c")), "a/b.c");
    }

    #[test]
    fn test_inner_dot_segments_kept() {
        assert_eq!(normalize_display_path(Path::new("./gen/./a.c")), "gen/./a.c");
    }
}
