// Standard library
use std::io;
use std::process::ExitCode;

// 3rd party crates
use tracing::{debug, info};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

// Project modules
mod catalog;
mod chain;
mod report;
mod settings;

// Project imports
use crate::settings::types::Settings;

/// Entry point of the Subtensor rate-limit reporter.
///
/// Connects to a chain RPC endpoint, reads every parameter of the fixed
/// catalog and prints one line per parameter. Parameters that cannot be
/// read are reported as such; only a failed connection aborts the run.
///
/// Exit status:
/// - `0` when the report was produced, even with unreadable parameters
/// - `1` when the configuration is invalid or the node cannot be reached
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let settings: Settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(settings.get_log_level());

    let filter = ["hyper_util", "reqwest", "hyper", "rustls"]
        .iter()
        .filter_map(|target| format!("{}=error", target).parse::<Directive>().ok())
        .fold(filter, |filter, directive| filter.add_directive(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    debug!(path = ?settings.config_path, "Configuration file consulted");
    info!("⚙️ Settings have been loaded.");

    let connector = settings.connector();
    let options = settings.report_options();
    let mut stdout = io::stdout().lock();

    match report::run(&connector, &options, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // A single line on stderr; stdout stays a clean report.
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
