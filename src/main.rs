//! Almanac CLI entrypoint for driving a calendar month window.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use almanac::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use almanac::{AlmanacConfig, AlmanacError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ignored = writeln!(io::stderr().lock(), "error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), AlmanacError> {
    let config = load_config()?;
    let sink: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    let report = cli::session::run(&config, &sink)?;
    cli::output::write_session_summary(&report)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AlmanacError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<AlmanacConfig, AlmanacError> {
    AlmanacConfig::load().map_err(|error| AlmanacError::Configuration {
        message: error.to_string(),
    })
}
