use std::path::{Path, PathBuf};

/// Subtree scanned when no source root is given.
pub const DEFAULT_SOURCE_ROOT: &str = "germinate";
pub const DEFAULT_CHECKER: &str = "pychecker";
pub const DEFAULT_TEST_DIR: &str = "tests";
pub const SOURCE_SUFFIX: &str = ".py";

/// Bytecode caches left behind when the checker imports a module.
pub const ARTIFACT_SUFFIXES: &[&str] = &[".pyc", ".pyo"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub source_root: PathBuf,
    pub checker: String,
    pub source_suffix: String,
    pub test_dir_name: String,
    pub artifact_suffixes: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            checker: DEFAULT_CHECKER.to_string(),
            source_suffix: SOURCE_SUFFIX.to_string(),
            test_dir_name: DEFAULT_TEST_DIR.to_string(),
            artifact_suffixes: ARTIFACT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunnerConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            source_root: root.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_checker(mut self, checker: impl Into<String>) -> Self {
        self.checker = checker.into();
        self
    }

    pub fn with_test_dir(mut self, name: impl Into<String>) -> Self {
        self.test_dir_name = name.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub root_dir: PathBuf,
    pub dry_run: bool,
}

impl CleanConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            dry_run: false,
        }
    }
}
