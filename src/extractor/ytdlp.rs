//! yt-dlp wrapper for video extraction
//!
//! This module handles video information extraction using yt-dlp.
//! It supports an explicitly configured binary as well as system-installed yt-dlp.

use crate::extractor::models::VideoInfo;
use crate::extractor::traits::Extractor;
use crate::extractor::youtube::is_youtube_url;
use crate::utils::config::AppSettings;
use crate::utils::error::YtdropError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as AsyncCommand;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Video extractor backed by the yt-dlp executable
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
    user_agent: Option<String>,
    timeout: Duration,
}

impl YtDlpExtractor {
    /// Initialize extractor from settings
    ///
    /// Search order:
    /// 1. `ytdlp_path` from settings
    /// 2. System PATH
    /// 3. Common installation paths (Homebrew, etc.)
    ///
    /// When nothing is found the bare name `yt-dlp` is used, so every
    /// extraction fails until the tool is installed.
    pub fn new(settings: &AppSettings) -> Self {
        let ytdlp_path = match settings.ytdlp_path.clone().or_else(find_ytdlp) {
            Some(path) => {
                info!("Using yt-dlp at: {}", path.display());
                path
            }
            None => {
                warn!("{}; extraction requests will fail", YtdropError::YtDlpNotFound);
                PathBuf::from("yt-dlp")
            }
        };

        Self {
            ytdlp_path,
            user_agent: settings.user_agent.clone(),
            timeout: settings.extract_timeout(),
        }
    }

    /// Build the yt-dlp arguments for a metadata-only extraction
    fn info_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--no-download".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
        ];
        if let Some(user_agent) = &self.user_agent {
            args.push("--user-agent".to_string());
            args.push(user_agent.clone());
        }
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    fn supports(&self, url: &str) -> bool {
        is_youtube_url(url)
    }

    /// Extract video information without downloading
    /// Uses: yt-dlp --dump-json --no-download
    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let command = AsyncCommand::new(&self.ytdlp_path)
            .args(self.info_args(url))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, command)
            .await
            .map_err(|_| {
                YtdropError::ResolutionFailed(format!(
                    "yt-dlp timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .with_context(|| format!("failed to run {}", self.ytdlp_path.display()))?;

        if !output.status.success() {
            let error_msg = last_stderr_line(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(YtdropError::ResolutionFailed(error_msg).into());
        }

        let video_info: VideoInfo = serde_json::from_slice(&output.stdout)
            .context("yt-dlp returned unparsable JSON")?;

        Ok(video_info)
    }
}

/// yt-dlp prints its actual error on the final non-empty stderr line
fn last_stderr_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or("yt-dlp exited with an error")
        .to_string()
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        debug!("Found system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Found yt-dlp in common path: {:?}", common);
        return Some(common);
    }

    None
}

/// Find yt-dlp in system PATH using `which`
fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel), pip --system
        "/usr/local/bin/yt-dlp",
        // Distribution packages
        "/usr/bin/yt-dlp",
        // pip --user
        "~/.local/bin/yt-dlp",
    ];

    common_paths
        .iter()
        .copied()
        .map(|path_str| match path_str.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(path_str)),
            None => PathBuf::from(path_str),
        })
        .find(|path| path.exists() && is_executable(path))
}

/// Check if a file is executable
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, just check that the file exists
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
