use clap::Parser;
use pycheck::cleanup::{self, ArtifactSweep};
use pycheck::cli::RunArgs;
use pycheck::{exit_codes, logging, reporter, runner};
use std::io;
use std::process;
use std::sync::Arc;
use tracing::warn;

fn main() {
    let args = RunArgs::parse();
    logging::init_logger(args.verbose);
    let config = args.to_config();

    // Best effort: a missing checker is not a failure.
    if !runner::command_exists(&config.checker) {
        reporter::print_checker_missing(&config.checker);
        process::exit(exit_codes::SUCCESS);
    }

    let checker = runner::RealCommandRunner::default();
    let sweep = Arc::new(ArtifactSweep::new(&config));
    if let Err(error) = cleanup::install_signal_handler(Arc::clone(&sweep), checker.current()) {
        warn!(%error, "artifacts will not be cleaned up on interrupt");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match pycheck::run_checks(&config, &checker, &mut out, sweep) {
        Ok(summary) => match args.report.as_deref() {
            Some(path) => match reporter::write_report(path, &config, &summary) {
                Ok(()) => summary.exit_code(),
                Err(error) => {
                    reporter::print_error(&error);
                    exit_codes::ERROR
                }
            },
            None => summary.exit_code(),
        },
        // The signal handler owns the exit once it has killed the checker.
        Err(error) if error.is_interrupted() => exit_codes::INTERRUPTED,
        Err(error) => {
            reporter::print_error(&error);
            exit_codes::ERROR
        }
    };
    drop(out);

    cleanup::exit(code);
}
