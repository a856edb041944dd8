use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_FROM_HEADER, DEFAULT_TO_HEADER};
use crate::error::{MpIncludeError, Result};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[mpinclude]` section.
    pub mpinclude: MpIncludeConfig,
    /// The file this was loaded from, `None` when using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Configuration options for the include rewrite.
pub struct MpIncludeConfig {
    /// Header to rewrite away (default `Python.h`).
    pub from_header: Option<String>,
    /// Header to include instead (default `micropython.h`).
    pub to_header: Option<String>,
    /// Skip the write for files with no matching directive (default `true`).
    pub skip_unchanged: Option<bool>,
}

impl MpIncludeConfig {
    /// Configured source header, or the default.
    #[must_use]
    pub fn from_header(&self) -> &str {
        self.from_header.as_deref().unwrap_or(DEFAULT_FROM_HEADER)
    }

    /// Configured target header, or the default.
    #[must_use]
    pub fn to_header(&self) -> &str {
        self.to_header.as_deref().unwrap_or(DEFAULT_TO_HEADER)
    }

    /// Configured skip-unchanged setting, or the default.
    #[must_use]
    pub fn skip_unchanged(&self) -> bool {
        self.skip_unchanged.unwrap_or(true)
    }
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The nearest `.mpinclude.toml` wins. Defaults apply when none exists.
    ///
    /// # Errors
    ///
    /// Returns [`MpIncludeError::Config`] if the nearest config file cannot be
    /// read or parsed; ancestors are not consulted in that case.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        // A bare relative file name pops to "", which `join` treats as ".".
        if current.as_os_str().is_empty() {
            current = PathBuf::from(".");
        }
        if let Ok(absolute) = current.canonicalize() {
            current = absolute;
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }

            if !current.pop() {
                break;
            }
        }

        Ok(Config::default())
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`MpIncludeError::Config`] if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MpIncludeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = toml::from_str::<Config>(&content).map_err(|e| MpIncludeError::Config {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_owned(),
        })?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mpinclude.from_header(), "Python.h");
        assert_eq!(config.mpinclude.to_header(), "micropython.h");
        assert!(config.mpinclude.skip_unchanged());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path()).unwrap();
        assert_eq!(config.mpinclude, MpIncludeConfig::default());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("gen");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[mpinclude]\nto_header = \"mp_compat.h\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested).unwrap();
        assert_eq!(config.mpinclude.to_header(), "mp_compat.h");
        assert_eq!(config.mpinclude.from_header(), "Python.h");
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[mpinclude]\nskip_unchanged = false\n",
        )
        .unwrap();
        let source = dir.path().join("module.c");
        fs::write(&source, "int x;\n").unwrap();

        let config = Config::load_from_path(&source).unwrap();
        assert!(!config.mpinclude.skip_unchanged());
    }

    #[test]
    fn test_load_file_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[mpinclude]\nfrom = \"x.h\"\n").unwrap();

        assert!(matches!(
            Config::load_file(&path),
            Err(MpIncludeError::Config { .. })
        ));
    }

    #[test]
    fn test_discovered_config_with_typo_is_an_error() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("gen");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[mpinclude]\nto_header = \"outer.h\"\n",
        )
        .unwrap();
        fs::write(
            nested.join(CONFIG_FILENAME),
            "[mpinclude]\nto_header = \"port/mpcompat.h\"\nskip_unchnaged = false\n",
        )
        .unwrap();

        let err = Config::load_from_path(&nested).unwrap_err();
        match err {
            MpIncludeError::Config { path, .. } => {
                assert_eq!(path.parent().unwrap(), nested.canonicalize().unwrap().as_path());
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, MpIncludeError::Config { .. }));
    }
}
