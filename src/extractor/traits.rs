use crate::extractor::models::VideoInfo;
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for all video extractors
///
/// This trait isolates the application from the specific extraction method
/// (yt-dlp subprocess, a native client, a test double, etc.).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "ytdlp")
    fn id(&self) -> &'static str;

    /// Checks if this extractor can handle the given URL
    fn supports(&self, url: &str) -> bool;

    /// Extracts video information including every available format.
    ///
    /// Formats are expected in the provider's own order, worst first.
    async fn extract_info(&self, url: &str) -> Result<VideoInfo>;
}
