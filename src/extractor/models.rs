//! Data structures for video information
//!
//! `VideoInfo` and `Format` mirror yt-dlp's `--dump-json` output; the
//! provider-neutral `VideoMetadata` and `StreamDescriptor` are what the rest
//! of the crate works with.

use serde::{Deserialize, Serialize};

/// Video information structure as reported by yt-dlp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub title: String,
    /// Seconds; yt-dlp emits this as a float for some extractors
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Video format information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub format_note: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f32>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_approx: Option<u64>,
    #[serde(default)]
    pub tbr: Option<f32>, // Total bitrate
    #[serde(default)]
    pub abr: Option<f32>, // Audio bitrate
}

impl Format {
    pub fn has_video(&self) -> bool {
        matches!(self.vcodec.as_deref(), Some(value) if value != "none" && !value.is_empty())
    }

    pub fn has_audio(&self) -> bool {
        matches!(self.acodec.as_deref(), Some(value) if value != "none" && !value.is_empty())
    }

    /// Exact size when known, otherwise yt-dlp's estimate
    pub fn effective_size(&self) -> Option<u64> {
        self.filesize.or(self.filesize_approx)
    }

    /// Human quality label such as "720p"
    pub fn quality_label(&self) -> Option<String> {
        let note = self
            .format_note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty());

        match (note, self.height) {
            (Some(note), _) if note.starts_with(|c: char| c.is_ascii_digit()) => {
                Some(note.to_string())
            }
            (_, Some(height)) => Some(format!("{}p", height)),
            (note, None) => note.map(ToString::to_string),
        }
    }

    /// MIME type in the `video/mp4; codecs="avc1..., mp4a..."` form browsers expect
    pub fn mime_type(&self) -> String {
        let kind = if self.has_video() || !self.has_audio() {
            "video"
        } else {
            "audio"
        };
        let ext = if self.ext.is_empty() { "mp4" } else { self.ext.as_str() };

        let codecs: Vec<&str> = [self.vcodec.as_deref(), self.acodec.as_deref()]
            .into_iter()
            .flatten()
            .filter(|codec| *codec != "none" && !codec.is_empty())
            .collect();

        if codecs.is_empty() {
            format!("{}/{}", kind, ext)
        } else {
            format!("{}/{}; codecs=\"{}\"", kind, ext, codecs.join(", "))
        }
    }
}

/// Descriptive data about the source video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    /// Empty when the provider supplied no thumbnail
    pub thumbnail: String,
    /// Whole seconds
    pub duration: u64,
}

impl From<&VideoInfo> for VideoMetadata {
    fn from(info: &VideoInfo) -> Self {
        let thumbnail = info
            .thumbnail
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| info.thumbnails.first().map(|t| t.url.clone()))
            .unwrap_or_default();

        let duration = info
            .duration
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(|secs| secs.round() as u64)
            .unwrap_or(0);

        Self {
            title: info.title.clone(),
            thumbnail,
            duration,
        }
    }
}

/// One downloadable rendition of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    /// Direct, time-limited media URL issued by the provider
    pub url: String,
    pub container: String,
    pub quality_label: Option<String>,
    pub fps: Option<u32>,
    pub content_length: Option<u64>,
    pub mime_type: String,
    #[serde(skip)]
    pub bitrate: Option<f32>,
    #[serde(skip)]
    pub audio_bitrate: Option<f32>,
    pub has_audio: bool,
    pub has_video: bool,
}

impl From<&Format> for StreamDescriptor {
    fn from(format: &Format) -> Self {
        Self {
            url: format.url.clone(),
            container: format.ext.clone(),
            quality_label: format.quality_label(),
            fps: format
                .fps
                .filter(|fps| fps.is_finite() && *fps > 0.0)
                .map(|fps| fps.round() as u32),
            content_length: format.effective_size(),
            mime_type: format.mime_type(),
            bitrate: format.tbr,
            audio_bitrate: format.abr,
            has_audio: format.has_audio(),
            has_video: format.has_video(),
        }
    }
}
