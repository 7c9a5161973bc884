//! YouTube URL recognition
//!
//! Mirrors the URL shapes YouTube itself serves: `watch?v=` links on the
//! main, mobile, music and gaming hosts, the `/embed/`, `/v/`, `/shorts/`
//! and `/live/` paths, and `youtu.be` short links.

use crate::utils::error::YtdropError;
use url::Url;

const QUERY_HOSTS: [&str; 5] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "gaming.youtube.com",
];

const PATH_PREFIXES: [&str; 4] = ["embed", "v", "shorts", "live"];

const SHORT_HOST: &str = "youtu.be";

const VIDEO_ID_LEN: usize = 11;

/// Extract the 11-character video ID from a YouTube URL
pub fn video_id(input: &str) -> Result<String, YtdropError> {
    let invalid = || YtdropError::InvalidInput(input.to_string());

    let parsed = Url::parse(input.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    let host = parsed.host_str().ok_or_else(invalid)?.to_ascii_lowercase();
    let mut segments = parsed
        .path_segments()
        .map(|s| s.filter(|segment| !segment.is_empty()).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();

    let candidate = if host == SHORT_HOST {
        segments.next().map(ToString::to_string)
    } else if QUERY_HOSTS.contains(&host.as_str()) {
        let from_query = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned());

        from_query.or_else(|| match (segments.next(), segments.next()) {
            (Some(prefix), Some(id)) if PATH_PREFIXES.contains(&prefix) => Some(id.to_string()),
            _ => None,
        })
    } else {
        None
    };

    let id: String = candidate
        .ok_or_else(invalid)?
        .chars()
        .take(VIDEO_ID_LEN)
        .collect();

    if id.len() == VIDEO_ID_LEN && id.chars().all(is_id_char) {
        Ok(id)
    } else {
        Err(invalid())
    }
}

/// Check if a URL points at a single YouTube video
pub fn is_youtube_url(input: &str) -> bool {
    video_id(input).is_ok()
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
