//! `scorecard` entry-point: wires settings, the credential file, the Neynar
//! adapter and the view controller, then runs one command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use scorecard::ScorecardSettings;
use scorecard::domain::{CredentialSession, ViewController};
use scorecard::inbound::cli::{CliArgs, execute};
use scorecard::outbound::credential_file::FileCredentialStore;
use scorecard::outbound::neynar::NeynarHttpSource;

fn main() -> io::Result<ExitCode> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> io::Result<ExitCode> {
    // Command-line arguments belong to clap; settings come from env and files.
    let settings = ScorecardSettings::load_from_iter([OsString::from("scorecard")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let base_url = settings
        .api_base_url()
        .map_err(|error| io::Error::other(format!("parse SCORECARD_API_BASE_URL: {error}")))?;

    let store = Arc::new(FileCredentialStore::new(settings.state_dir()));
    let session = CredentialSession::load_or_initialize(store, settings.default_api_key())
        .map_err(|error| io::Error::other(format!("load API key: {error}")))?;
    let source = NeynarHttpSource::with_timeout(base_url, settings.request_timeout())
        .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;
    let controller = ViewController::new(Arc::new(session), Arc::new(source));

    let mut stdout = io::stdout().lock();
    let status = execute(&args, &controller, &mut stdout).await?;
    stdout.flush()?;
    Ok(ExitCode::from(status.exit_code()))
}
