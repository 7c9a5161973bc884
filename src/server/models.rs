//! JSON bodies of the HTTP API

use crate::extractor::models::{StreamDescriptor, VideoMetadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
}

/// Single-pick response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestFormatResponse {
    pub url: String,
    pub title: String,
    pub thumbnail: String,
    pub content_type: String,
    /// Decimal byte count, as browsers report Content-Length
    pub content_length: Option<String>,
}

impl BestFormatResponse {
    pub fn new(metadata: VideoMetadata, stream: StreamDescriptor) -> Self {
        Self {
            url: stream.url,
            title: metadata.title,
            thumbnail: metadata.thumbnail,
            content_type: stream.mime_type,
            content_length: stream.content_length.map(|len| len.to_string()),
        }
    }
}

/// Ranked-list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatListResponse {
    pub formats: Vec<StreamDescriptor>,
    pub title: String,
    pub thumbnail: String,
    pub duration: u64,
}

impl FormatListResponse {
    pub fn new(metadata: VideoMetadata, formats: Vec<StreamDescriptor>) -> Self {
        Self {
            formats,
            title: metadata.title,
            thumbnail: metadata.thumbnail,
            duration: metadata.duration,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a successful download request, in the deployment's shape
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DownloadResponse {
    Best(BestFormatResponse),
    List(FormatListResponse),
}
