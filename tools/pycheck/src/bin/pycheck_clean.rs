use clap::Parser;
use pycheck::cli::CleanArgs;
use pycheck::{clean, exit_codes, logging, reporter};
use std::io;
use std::process;

fn main() {
    let args = CleanArgs::parse();
    logging::init_logger(args.verbose);
    let config = args.to_config();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match clean::run(&config, &mut out) {
        Ok(report) => {
            for (path, error) in &report.failed {
                reporter::print_clean_failure(path, error);
            }
            if report.success() {
                exit_codes::SUCCESS
            } else {
                exit_codes::FAILURE
            }
        }
        Err(error) => {
            reporter::print_error(&error.into());
            exit_codes::ERROR
        }
    };
    drop(out);

    process::exit(code);
}
