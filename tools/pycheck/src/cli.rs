use crate::config::{
    CleanConfig, RunnerConfig, DEFAULT_CHECKER, DEFAULT_SOURCE_ROOT, DEFAULT_TEST_DIR,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "run-pychecker",
    about = "Run pychecker over every Python module in a source tree and fail on any finding"
)]
pub struct RunArgs {
    /// Directory scanned for Python modules.
    #[arg(long, env = "PYCHECK_SOURCE_ROOT", default_value = DEFAULT_SOURCE_ROOT)]
    pub source_root: PathBuf,

    /// Checker executable, resolved on PATH.
    #[arg(long, env = "PYCHECK_CHECKER", default_value = DEFAULT_CHECKER)]
    pub checker: String,

    /// Directory name excluded from checking and cleanup wherever it appears.
    #[arg(long, env = "PYCHECK_TEST_DIR", default_value = DEFAULT_TEST_DIR)]
    pub test_dir: String,

    /// Also write a JSON summary of every checked file here.
    #[arg(long, env = "PYCHECK_REPORT")]
    pub report: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl RunArgs {
    pub fn to_config(&self) -> RunnerConfig {
        RunnerConfig::from_root(&self.source_root)
            .with_checker(self.checker.clone())
            .with_test_dir(self.test_dir.clone())
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pycheck-clean",
    about = "Remove bytecode caches, egg-info and generated man pages from a source tree"
)]
pub struct CleanArgs {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// List what would be removed without deleting anything.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl CleanArgs {
    pub fn to_config(&self) -> CleanConfig {
        CleanConfig {
            root_dir: self.root.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_args_default_to_project_layout() {
        let args = RunArgs::try_parse_from(["run-pychecker"]).unwrap();
        assert_eq!(args.to_config(), RunnerConfig::default());
        assert!(args.report.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn run_args_override_config() {
        let args = RunArgs::try_parse_from([
            "run-pychecker",
            "--source-root",
            "src/pkg",
            "--checker",
            "/opt/bin/pychecker",
            "--test-dir",
            "testing",
            "--report",
            "out.json",
            "-v",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.source_root, PathBuf::from("src/pkg"));
        assert_eq!(config.checker, "/opt/bin/pychecker");
        assert_eq!(config.test_dir_name, "testing");
        assert_eq!(args.report, Some(PathBuf::from("out.json")));
        assert!(args.verbose);
    }

    #[test]
    fn run_args_reject_positional_arguments() {
        assert!(RunArgs::try_parse_from(["run-pychecker", "germinate/seeds.py"]).is_err());
    }

    #[test]
    fn clean_args_default_to_current_dir() {
        let args = CleanArgs::try_parse_from(["pycheck-clean", "--dry-run"]).unwrap();
        let config = args.to_config();
        assert_eq!(config.root_dir, PathBuf::from("."));
        assert!(config.dry_run);
    }
}
