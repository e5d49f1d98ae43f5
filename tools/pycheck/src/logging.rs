use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Overrides the log filter, e.g. `PYCHECK_LOG=pycheck=trace`.
pub const LOG_ENV: &str = "PYCHECK_LOG";

/// Filter used when `PYCHECK_LOG` is unset or invalid.
///
/// Warnings pass from every target, binaries included; `verbose` adds the
/// library's debug events.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "pycheck=debug,warn"
    } else {
        "warn"
    }
}

/// Install a compact stderr logger; stdout is reserved for checker output.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
