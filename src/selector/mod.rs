//! Format selection over resolved streams
//!
//! Only streams carrying both audio and video are ever emitted, since the
//! browser downloads a single file and cannot mux separate tracks.

pub mod quality;

pub use quality::{parse_quality, provider_order};

use crate::extractor::models::StreamDescriptor;
use crate::utils::error::YtdropError;
use std::cmp::Reverse;

const BEST_CONTAINER: &str = "mp4";

fn is_muxed(stream: &StreamDescriptor) -> bool {
    stream.has_audio && stream.has_video
}

/// Pick the provider's highest-ranked mp4 stream with audio and video.
///
/// On a full tie the entry later in provider order wins, since yt-dlp lists
/// formats worst first.
pub fn choose_best(streams: &[StreamDescriptor]) -> Option<&StreamDescriptor> {
    streams
        .iter()
        .filter(|s| is_muxed(s) && s.container.eq_ignore_ascii_case(BEST_CONTAINER))
        .max_by(|a, b| provider_order(a, b))
}

/// `choose_best`, surfacing an empty pick as `NoSuitableFormat`
pub fn select_best(streams: &[StreamDescriptor]) -> Result<StreamDescriptor, YtdropError> {
    choose_best(streams)
        .cloned()
        .ok_or(YtdropError::NoSuitableFormat)
}

/// Every audio+video stream, sorted by descending numeric quality.
///
/// The sort is stable: equal qualities (including unparsable labels, which
/// count as 0) keep their provider order.
pub fn rank_all(streams: &[StreamDescriptor]) -> Vec<StreamDescriptor> {
    let mut ranked: Vec<StreamDescriptor> =
        streams.iter().filter(|s| is_muxed(s)).cloned().collect();
    ranked.sort_by_key(|s| Reverse(parse_quality(s.quality_label.as_deref())));
    ranked
}
