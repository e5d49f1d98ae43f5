use crate::config::RunnerConfig;
use crate::error::PycheckError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Collect the files to hand to the checker, sorted by path bytes.
///
/// Any unreadable directory aborts the scan.
pub fn collect_sources(config: &RunnerConfig) -> Result<Vec<PathBuf>, PycheckError> {
    if !config.source_root.exists() {
        return Err(PycheckError::MissingSourceRoot(config.source_root.clone()));
    }

    let suffixes = [config.source_suffix.as_str()];
    let mut results = Vec::new();
    if !is_pruned(&config.source_root, &config.test_dir_name) {
        collect_sources_inner(
            &config.source_root,
            &suffixes,
            &config.test_dir_name,
            &mut results,
        )?;
    }
    sort_paths(&mut results);
    Ok(results)
}

fn collect_sources_inner(
    dir: &Path,
    suffixes: &[&str],
    prune: &str,
    results: &mut Vec<PathBuf>,
) -> Result<(), PycheckError> {
    let entries = fs::read_dir(dir).map_err(|source| PycheckError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| PycheckError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| PycheckError::Scan {
            path: entry.path(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if name != prune {
                collect_sources_inner(&entry.path(), suffixes, prune, results)?;
            }
        } else if has_suffix(&name, suffixes) {
            results.push(entry.path());
        }
    }

    Ok(())
}

/// Collect bytecode artifacts for the cleanup sweep.
///
/// Unreadable directories are logged and skipped; a missing root yields nothing.
pub fn collect_artifacts(root: &Path, suffixes: &[&str], prune: &str) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if root.is_dir() && !is_pruned(root, prune) {
        collect_artifacts_inner(root, suffixes, prune, &mut results);
    }
    sort_paths(&mut results);
    results
}

fn collect_artifacts_inner(dir: &Path, suffixes: &[&str], prune: &str, results: &mut Vec<PathBuf>) {
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
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if name != prune {
                collect_artifacts_inner(&entry.path(), suffixes, prune, results);
            }
        } else if has_suffix(&name, suffixes) {
            results.push(entry.path());
        }
    }
}

fn is_pruned(root: &Path, prune: &str) -> bool {
    root.file_name()
        .map(|name| name.to_string_lossy() == prune)
        .unwrap_or(false)
}

fn has_suffix(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix))
}

fn sort_paths(paths: &mut Vec<PathBuf>) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.dedup();
}
