//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use ytdrop::extractor::{Extractor, Format, Resolver, VideoInfo};

pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

pub enum Behavior {
    Succeed(VideoInfo),
    Fail(&'static str),
}

/// Extractor returning canned data and counting invocations
pub struct MockExtractor {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockExtractor {
    pub fn succeeding(info: VideoInfo) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Succeed(info),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Fail(message),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn supports(&self, _url: &str) -> bool {
        true
    }

    async fn extract_info(&self, _url: &str) -> Result<VideoInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed(info) => Ok(info.clone()),
            Behavior::Fail(message) => Err(anyhow!(*message)),
        }
    }
}

pub fn resolver_for(extractor: Arc<MockExtractor>) -> Resolver {
    Resolver::new(extractor)
}

pub fn format(
    id: &str,
    ext: &str,
    height: Option<u32>,
    vcodec: &str,
    acodec: &str,
) -> Format {
    Format {
        ext: ext.to_string(),
        url: format!("https://rr1.googlevideo.com/videoplayback?itag={}", id),
        height,
        vcodec: Some(vcodec.to_string()),
        acodec: Some(acodec.to_string()),
        filesize: Some(1_000 * u64::from(height.unwrap_or(1))),
        ..Default::default()
    }
}

/// Typical YouTube listing: provider order is worst first
pub fn sample_video() -> VideoInfo {
    VideoInfo {
        title: "Sample Video".to_string(),
        duration: Some(212.0),
        thumbnail: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
        thumbnails: Vec::new(),
        formats: vec![
            format("140", "m4a", None, "none", "mp4a.40.2"),
            format("18", "mp4", Some(360), "avc1.42001E", "mp4a.40.2"),
            format("43", "webm", Some(480), "vp8.0", "vorbis"),
            format("136", "mp4", Some(720), "avc1.4d401f", "none"),
            format("22", "mp4", Some(720), "avc1.64001F", "mp4a.40.2"),
            format("137", "mp4", Some(1080), "avc1.640028", "none"),
        ],
    }
}

/// Only adaptive streams, nothing with audio and video together
pub fn adaptive_only_video() -> VideoInfo {
    VideoInfo {
        formats: vec![
            format("140", "m4a", None, "none", "mp4a.40.2"),
            format("137", "mp4", Some(1080), "avc1.640028", "none"),
        ],
        ..sample_video()
    }
}
