use feedurl_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

const LOG_FILTER: &str = "info,feedurl=debug,feedurl_core=debug";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging("feedurl", LOG_FILTER) {
        logging::init_logging_stderr(LOG_FILTER);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    match CliCommand::run_from_args().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("feedurl error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
