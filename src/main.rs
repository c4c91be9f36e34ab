mod cli;
mod config;
mod errors;
mod models;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use config::{EnvFileSource, EnvSnapshot};
use errors::AppError;
use models::Report;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.debug).and_then(|()| run(&cli)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) -> Result<(), AppError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(debug, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// `RUST_LOG` when it parses, `env_check=warn` otherwise.
/// `--debug` always raises this crate to debug on top of either.
fn log_filter(debug: bool, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    let filter = rust_log
        .and_then(|dirs| EnvFilter::try_new(dirs).ok())
        .unwrap_or_else(|| EnvFilter::new("env_check=warn"));

    if !debug {
        return Ok(filter);
    }
    let directive = "env_check=debug"
        .parse::<Directive>()
        .map_err(|e| AppError::Logging(format!("{}", e)))?;
    Ok(filter.add_directive(directive))
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let source = match &cli.env_file {
        Some(path) => EnvFileSource::Path(path.clone()),
        None => EnvFileSource::Discover,
    };
    debug!(?source, "loading environment");

    let env = EnvSnapshot::load(&source)?;
    let report = Report::build(&env)?;
    println!("{}", output::format_report(&report, &cli.format));
    Ok(())
}
