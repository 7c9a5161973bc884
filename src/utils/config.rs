//! Application configuration

use crate::utils::error::YtdropError;
use crate::utils::paths::get_settings_path;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser-like identity sent to YouTube to reduce request rejection
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Address the HTTP server listens on
    pub bind_address: String,

    /// Which response shape the download endpoint returns
    pub response_mode: ResponseMode,

    /// User-Agent passed to yt-dlp (None lets yt-dlp choose)
    pub user_agent: Option<String>,

    /// Explicit yt-dlp binary, bypassing discovery
    pub ytdlp_path: Option<PathBuf>,

    /// Upper bound on a single extraction (seconds)
    pub extract_timeout_secs: u64,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            response_mode: ResponseMode::Best,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            ytdlp_path: None,
            extract_timeout_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Settings file to read: `path` when given, else the default settings
    /// file if one exists.
    pub fn source(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(get_settings_path()).filter(|default| default.is_file()),
        }
    }

    /// Load settings from `source`, or built-in defaults when there is none.
    ///
    /// Runs before logging is initialized, so it reports failures through
    /// the returned error only.
    pub fn load(source: Option<&Path>) -> Result<Self, YtdropError> {
        match source {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read settings from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self, YtdropError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), YtdropError> {
        if self.extract_timeout_secs == 0 {
            return Err(YtdropError::ConfigError(
                "extract_timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, YtdropError> {
        self.bind_address.parse().map_err(|e| {
            YtdropError::ConfigError(format!("bad bind_address {:?}: {}", self.bind_address, e))
        })
    }

    pub fn extract_timeout(&self) -> Duration {
        Duration::from_secs(self.extract_timeout_secs)
    }
}

/// Response shape of the download endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Single best mp4 pick, downloaded automatically by the client
    #[default]
    Best,
    /// Every audio+video stream, ranked by quality
    List,
}

impl ResponseMode {
    /// Get string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Best => "best",
            ResponseMode::List => "list",
        }
    }
}

impl std::str::FromStr for ResponseMode {
    type Err = YtdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" => Ok(ResponseMode::Best),
            "list" => Ok(ResponseMode::List),
            other => Err(YtdropError::ConfigError(format!(
                "unknown response mode {:?} (expected best or list)",
                other
            ))),
        }
    }
}
