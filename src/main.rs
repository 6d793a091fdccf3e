//! CLI entry point for the HMRC API client.
//!
//! Fires the Hello World endpoints to check connectivity and credentials, and
//! exposes the date-format check used before building dated requests.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use hmrc_api::config::Settings;
use hmrc_api::endpoints::{HelloApplication, HelloUser, HelloWorld};
use hmrc_api::fetch::BasicClient;
use hmrc_api::helpers::check_date_string_format;
use hmrc_api::{Endpoint, Request};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "hmrc")]
#[command(about = "Call the HMRC API from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the open Hello World endpoint
    HelloWorld(Target),
    /// Call the application-restricted endpoint with HMRC_SERVER_TOKEN
    HelloApplication(Target),
    /// Call the user-restricted endpoint with HMRC_ACCESS_TOKEN
    HelloUser(Target),
    /// Check that a date string is written exactly in the given format
    CheckDate {
        /// Date string, e.g. 2020-01-25
        value: String,

        /// Expected format, e.g. Y-m-d
        format: String,
    },
}

#[derive(Args)]
struct Target {
    /// Use the live environment instead of the one from HMRC_ENV
    #[arg(long)]
    live: bool,

    /// Custom API base URL (overrides the environment)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Give up on the call after this many seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/hmrc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("hmrc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::HelloWorld(target) => {
            call(&settings, &target, HelloWorld).await?;
        }
        Commands::HelloApplication(target) => {
            let Some(token) = settings.server_token.clone() else {
                bail!("HMRC_SERVER_TOKEN must be set");
            };
            call(&settings, &target, HelloApplication::new(token)).await?;
        }
        Commands::HelloUser(target) => {
            let Some(token) = settings.access_token.clone() else {
                bail!("HMRC_ACCESS_TOKEN must be set");
            };
            call(&settings, &target, HelloUser::new(token)).await?;
        }
        Commands::CheckDate { value, format } => {
            match check_date_string_format(&value, &format) {
                Ok(()) => info!(value = %value, format = %format, "Date matches format"),
                Err(e) => {
                    error!(value = %value, format = %format, error = %e, "Date does not match format");
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Fires `endpoint` with the env settings, then the CLI overrides on top.
async fn call<E: Endpoint>(settings: &Settings, target: &Target, endpoint: E) -> Result<()> {
    let client = BasicClient::with_timeout(Duration::from_secs(target.timeout))
        .context("Failed to build HTTP client")?;

    let mut request = settings.apply(Request::with_client(endpoint, client));
    if target.live {
        request = request.use_live_env();
    }
    if let Some(url) = &target.base_url {
        request = request.set_api_base_url(url.as_str());
    }

    info!(uri = %request.uri(), accept = %request.accept_header(), "Calling HMRC");

    let resp = request
        .fire()
        .await
        .with_context(|| format!("Request to {} failed", request.uri()))?;

    if resp.is_success() {
        info!(status = resp.status().as_u16(), body = %resp.text(), "HMRC responded");
    } else {
        warn!(status = resp.status().as_u16(), body = %resp.text(), "HMRC returned an error status");
    }

    Ok(())
}
