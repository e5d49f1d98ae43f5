use crate::diagnostics::{Diagnostic, DiagnosticFilter};
use crate::error::PycheckError;
use crate::exit_codes;
use crate::reporter;
use crate::runner::{CommandCall, CommandRunner};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: String,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-file outcomes in check order. The run fails if any file failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: Vec<FileOutcome>,
}

impl CheckSummary {
    pub fn failed(&self) -> bool {
        self.files.iter().any(|file| !file.passed)
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    pub fn failing_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|file| !file.passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() {
            exit_codes::FAILURE
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Run the checker on one file and keep the lines it attributes to that file.
///
/// The checker's exit status is ignored; only its stdout decides.
pub fn check_file<R: CommandRunner>(
    runner: &R,
    checker: &str,
    path: &Path,
) -> Result<FileOutcome, PycheckError> {
    let shown = path.to_string_lossy().to_string();
    let filter = DiagnosticFilter::for_path(&shown)?;
    let call = CommandCall::new(checker, vec![shown.clone()]);

    let started = Instant::now();
    let result = runner.run(&call).map_err(|source| PycheckError::Launch {
        checker: checker.to_string(),
        path: shown.clone(),
        source,
    })?;
    let diagnostics = filter.extract(&result.stdout);
    debug!(
        path = %shown,
        status = ?result.status,
        exited_cleanly = result.success(),
        diagnostics = diagnostics.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "checked file"
    );

    Ok(FileOutcome {
        path: shown,
        passed: diagnostics.is_empty(),
        diagnostics,
    })
}

/// Check every file in order, printing diagnostics for failing files as they come.
///
/// A failing file never stops the scan; a checker that cannot be started does.
pub fn check_files<R: CommandRunner, W: Write>(
    runner: &R,
    checker: &str,
    files: &[PathBuf],
    out: &mut W,
) -> Result<CheckSummary, PycheckError> {
    let mut summary = CheckSummary::default();
    for path in files {
        let outcome = check_file(runner, checker, path)?;
        if !outcome.passed {
            reporter::print_diagnostics(out, &outcome)?;
        }
        summary.files.push(outcome);
    }
    Ok(summary)
}
