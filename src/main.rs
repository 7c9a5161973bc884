//! ytdrop - YouTube download front-end
//!
//! Serves a small web page that resolves a YouTube URL through yt-dlp and
//! hands the browser a direct link to the best (or a chosen) stream.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use ytdrop::extractor::{ytdlp, Resolver, YtDlpExtractor};
use ytdrop::server::{self, models::ErrorBody, ApiError, AppState};
use ytdrop::utils::{AppSettings, ResponseMode};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:3000
    #[arg(long)]
    bind: Option<String>,

    /// Response shape: best or list
    #[arg(long)]
    mode: Option<ResponseMode>,

    /// Path to the yt-dlp binary
    #[arg(long)]
    ytdlp: Option<PathBuf>,

    /// User-Agent passed to yt-dlp
    #[arg(long)]
    user_agent: Option<String>,

    /// Resolve one URL, print the JSON response and exit
    #[arg(long)]
    resolve: Option<String>,
}

impl Args {
    fn apply(&self, settings: &mut AppSettings) {
        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        if let Some(mode) = self.mode {
            settings.response_mode = mode;
        }
        if let Some(path) = &self.ytdlp {
            settings.ytdlp_path = Some(path.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let source = AppSettings::source(args.config.as_deref());
    let mut settings = AppSettings::load(source.as_deref())?;
    args.apply(&mut settings);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &source {
        Some(path) => info!("Loaded settings from {}", path.display()),
        None => debug!("No settings file, using defaults"),
    }

    settings.validate()?;
    check_ytdlp_installed(&settings);

    let extractor = Arc::new(YtDlpExtractor::new(&settings));
    let resolver = Arc::new(Resolver::new(extractor));

    if let Some(url) = args.resolve {
        return resolve_cli(&resolver, settings.response_mode, &url).await;
    }

    let state = AppState::new(resolver, settings.response_mode);
    server::run_server(settings.socket_addr()?, state).await?;

    Ok(ExitCode::SUCCESS)
}

fn check_ytdlp_installed(settings: &AppSettings) {
    if settings.ytdlp_path.is_some() || ytdlp::find_ytdlp().is_some() {
        return;
    }

    // Warn but keep running; requests fail with a resolution error until installed
    warn!("yt-dlp not found in PATH or common locations");
    warn!("Install it with `pip install yt-dlp` or see https://github.com/yt-dlp/yt-dlp");
}

/// Headless single resolution, printing what the HTTP endpoint would return
async fn resolve_cli(resolver: &Resolver, mode: ResponseMode, url: &str) -> Result<ExitCode> {
    info!("Resolving {} ({} mode)", url, mode.as_str());

    match server::build_response(resolver, mode, url).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Resolution failed: {}", e);
            let api = ApiError::from(e);
            let body = ErrorBody { error: api.message };
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
