mod cli;
mod config;
mod logging;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; never fail the command over it.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("darkroom-url error: {:#}", err);
        std::process::exit(1);
    }
}
