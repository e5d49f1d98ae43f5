use crate::config::RunnerConfig;
use crate::error::PycheckError;
use crate::exit_codes;
use crate::runner::RunningChild;
use crate::walker;
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;
use std::ffi::c_int;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, warn};

/// Signals that stop the run and trigger the sweep.
pub const TERMINATION_SIGNALS: [c_int; 4] = [SIGHUP, SIGINT, SIGQUIT, SIGTERM];

/// Held by whichever thread is ending the process.
static EXITING: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Removes bytecode artifacts from the source tree, at most once per process.
///
/// Shared between the scope guard and the signal handler. A second caller
/// blocks until an in-progress sweep finishes, then does nothing.
#[derive(Debug)]
pub struct ArtifactSweep {
    root: PathBuf,
    test_dir_name: String,
    suffixes: Vec<String>,
    swept: Mutex<bool>,
}

impl ArtifactSweep {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            root: config.source_root.clone(),
            test_dir_name: config.test_dir_name.clone(),
            suffixes: config.artifact_suffixes.clone(),
            swept: Mutex::new(false),
        }
    }

    /// Returns `None` if the sweep already ran.
    pub fn run(&self) -> Option<SweepReport> {
        let mut swept = self.swept.lock().unwrap_or_else(|e| e.into_inner());
        if *swept {
            return None;
        }
        let report = self.sweep();
        *swept = true;
        Some(report)
    }

    pub fn has_run(&self) -> bool {
        *self.swept.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sweep(&self) -> SweepReport {
        let suffixes: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        let mut report = SweepReport::default();

        for path in walker::collect_artifacts(&self.root, &suffixes, &self.test_dir_name) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!(path = %path.display(), "removed artifact");
                    report.removed.push(path);
                }
                Err(error) if error.kind() == io::ErrorKind::NotFound => {}
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to remove artifact");
                    report.failed.push(path);
                }
            }
        }

        debug!(
            removed = report.removed.len(),
            failed = report.failed.len(),
            "artifact sweep finished"
        );
        report
    }
}

/// Runs the sweep when dropped, however the scope is left.
pub struct SweepGuard {
    sweep: Arc<ArtifactSweep>,
}

impl SweepGuard {
    pub fn new(sweep: Arc<ArtifactSweep>) -> Self {
        Self { sweep }
    }
}

impl Drop for SweepGuard {
    fn drop(&mut self) {
        let _ = self.sweep.run();
    }
}

/// Exit with `code`, unless the signal handler is already ending the process.
///
/// In that case this blocks and the handler's exit status wins.
pub fn exit(code: i32) -> ! {
    let _exiting = EXITING.lock().unwrap_or_else(|e| e.into_inner());
    process::exit(code)
}

/// On SIGHUP, SIGINT, SIGQUIT or SIGTERM: kill the running checker, sweep, exit 130.
pub fn install_signal_handler(
    sweep: Arc<ArtifactSweep>,
    child: RunningChild,
) -> Result<(), PycheckError> {
    let mut signals = Signals::new(TERMINATION_SIGNALS).map_err(PycheckError::Signal)?;
    thread::Builder::new()
        .name("pycheck-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                let _exiting = EXITING.lock().unwrap_or_else(|e| e.into_inner());
                debug!(signal, "interrupted, cleaning up");
                if child.kill() {
                    debug!("stopped running checker");
                }
                let _ = sweep.run();
                process::exit(exit_codes::INTERRUPTED);
            }
        })
        .map_err(PycheckError::Signal)?;
    Ok(())
}
