use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::domain::CheckRequest;
use crate::error::{CheckError, ConfigError};
use crate::output::Verdict;
use crate::shelly::{Normalize, ShellyClient, fetch};
use crate::verdict::{Policy, evaluate};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info};

mod app_config;
mod cli;
mod domain;
mod error;
mod extensions;
mod output;
mod shelly;
mod verdict;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => report(Verdict::from_error(&ConfigError::from(err).into())),
    };

    init_tracing(cli.verbose);
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let verdict = check(cli).await.unwrap_or_else(|err| Verdict::from_error(&err));
    report(verdict)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

async fn check(cli: Cli) -> Result<Verdict, CheckError> {
    let config = AppConfig::load(&cli.config)?;
    if let Some(model) = &cli.model {
        debug!(model, "Model is informational only");
    }

    let request = cli.into_request(&config)?;
    run(&request, &config).await
}

/// Runs a single check against the device, from the first request to the verdict.
async fn run(request: &CheckRequest, config: &AppConfig) -> Result<Verdict, CheckError> {
    let client = ShellyClient::new(request, config)?;
    let status = fetch(&client, request).await?.normalize(request.switch);
    debug!(?status, "Normalized device status");

    Ok(evaluate(&status, &Policy::from(request)))
}

/// Prints the single report line and ends the process with the matching exit code.
fn report(verdict: Verdict) -> ! {
    println!("{}", verdict);
    std::process::exit(verdict.exit_code())
}
