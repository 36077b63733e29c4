use clap::Parser;
use sum_program::utils::logger;
use sum_program::{run_stdio, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Invalid and missing input are handled inside the session; only terminal
    // failures reach the error arm.
    match run_stdio() {
        Ok(outcome) => {
            tracing::debug!("Session finished: {:?}", outcome);
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
