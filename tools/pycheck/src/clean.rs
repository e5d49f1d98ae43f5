//! Tree cleaner for generated Python and packaging leftovers.
//!
//! Removes `__pycache__` and `*.egg-info` directories, stray `*.pyc` files,
//! and man pages generated under `debhelper/`. Hidden directories and
//! `debian/` are never entered.

use crate::config::CleanConfig;
use crate::reporter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CLEAN_SKIP_DIRS: &[&str] = &["debian"];
pub const CACHE_DIR_NAME: &str = "__pycache__";
pub const EGG_INFO_SUFFIX: &str = ".egg-info";
pub const BYTECODE_SUFFIX: &str = ".pyc";
pub const MAN_PAGE_DIR: &str = "debhelper";
pub const MAN_PAGE_SUFFIX: &str = ".1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTarget {
    pub path: PathBuf,
    pub kind: TargetKind,
}

#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: usize,
    pub failed: Vec<(PathBuf, String)>,
}

impl CleanReport {
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Walk the tree and list everything that would be removed, sorted by path.
pub fn plan(root: &Path) -> Vec<CleanTarget> {
    let mut targets = Vec::new();
    plan_inner(root, root, &mut targets);
    targets.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    targets
}

fn plan_inner(dir: &Path, root: &Path, targets: &mut Vec<CleanTarget>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(path = %dir.display(), %error, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if name.starts_with('.') || CLEAN_SKIP_DIRS.contains(&&*name) {
                continue;
            }
            if name == CACHE_DIR_NAME || name.ends_with(EGG_INFO_SUFFIX) {
                targets.push(CleanTarget {
                    path,
                    kind: TargetKind::Directory,
                });
                continue;
            }
            plan_inner(&path, root, targets);
        } else if name.ends_with(BYTECODE_SUFFIX)
            || (name.ends_with(MAN_PAGE_SUFFIX) && is_under_man_page_dir(&path, root))
        {
            targets.push(CleanTarget {
                path,
                kind: TargetKind::File,
            });
        }
    }
}

fn is_under_man_page_dir(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| rel.components().next())
        .map(|first| first.as_os_str() == MAN_PAGE_DIR)
        .unwrap_or(false)
}

/// Remove (or with `dry_run`, just announce) each target. Failures do not stop the pass.
pub fn apply<W: Write>(targets: &[CleanTarget], dry_run: bool, out: &mut W) -> io::Result<CleanReport> {
    let mut report = CleanReport::default();

    for target in targets {
        reporter::print_clean_action(out, &target.path, dry_run)?;
        if dry_run {
            continue;
        }

        let result = match target.kind {
            TargetKind::Directory => fs::remove_dir_all(&target.path),
            TargetKind::File => fs::remove_file(&target.path),
        };
        match result {
            Ok(()) => {
                debug!(path = %target.path.display(), "removed");
                report.removed += 1;
            }
            Err(error) => {
                warn!(path = %target.path.display(), %error, "removal failed");
                report.failed.push((target.path.clone(), error.to_string()));
            }
        }
    }

    Ok(report)
}

pub fn run<W: Write>(config: &CleanConfig, out: &mut W) -> io::Result<CleanReport> {
    let targets = plan(&config.root_dir);
    debug!(targets = targets.len(), root = %config.root_dir.display(), "planned clean");
    apply(&targets, config.dry_run, out)
}
