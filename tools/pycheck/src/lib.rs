pub mod check;
pub mod clean;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod reporter;
pub mod runner;
pub mod walker;

pub use check::{CheckSummary, FileOutcome};
pub use cleanup::{ArtifactSweep, SweepGuard};
pub use config::RunnerConfig;
pub use error::PycheckError;
pub use runner::{CommandCall, CommandResult, CommandRunner, RealCommandRunner, RunningChild};

use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Check every source file under the configured root.
///
/// The sweep runs before this returns, whether the scan succeeded or not.
pub fn run_checks<R: CommandRunner, W: Write>(
    config: &RunnerConfig,
    runner: &R,
    out: &mut W,
    sweep: Arc<ArtifactSweep>,
) -> Result<CheckSummary, PycheckError> {
    let _guard = SweepGuard::new(sweep);

    let files = walker::collect_sources(config)?;
    debug!(
        files = files.len(),
        root = %config.source_root.display(),
        "collected source files"
    );
    let summary = check::check_files(runner, &config.checker, &files, out)?;
    out.flush()?;
    Ok(summary)
}
