//! Quality ordering helpers

use crate::extractor::models::StreamDescriptor;
use std::cmp::Ordering;

/// Numeric quality from a label's leading digits ("1080p60" -> 1080).
///
/// Labels without leading digits, and missing labels, rank as 0.
pub fn parse_quality(label: Option<&str>) -> u32 {
    let Some(label) = label else {
        return 0;
    };
    let label = label.trim_start();
    let end = label
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(label.len());

    // Absurdly long digit runs saturate rather than wrap
    label[..end].parse::<u32>().unwrap_or(if end > 0 { u32::MAX } else { 0 })
}

/// Provider "highest quality" ordering.
///
/// Compares numeric quality, then frame rate, then total bitrate, then audio
/// bitrate. Missing values rank lowest.
pub fn provider_order(a: &StreamDescriptor, b: &StreamDescriptor) -> Ordering {
    parse_quality(a.quality_label.as_deref())
        .cmp(&parse_quality(b.quality_label.as_deref()))
        .then_with(|| a.fps.unwrap_or(0).cmp(&b.fps.unwrap_or(0)))
        .then_with(|| cmp_rate(a.bitrate, b.bitrate))
        .then_with(|| cmp_rate(a.audio_bitrate, b.audio_bitrate))
}

fn cmp_rate(a: Option<f32>, b: Option<f32>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quality() {
        assert_eq!(parse_quality(Some("1080p")), 1080);
        assert_eq!(parse_quality(Some("720p60")), 720);
        assert_eq!(parse_quality(Some(" 480p")), 480);
        assert_eq!(parse_quality(Some("144")), 144);
        assert_eq!(parse_quality(Some("hd720")), 0);
        assert_eq!(parse_quality(Some("tiny")), 0);
        assert_eq!(parse_quality(Some("")), 0);
        assert_eq!(parse_quality(None), 0);
        assert_eq!(parse_quality(Some("99999999999999p")), u32::MAX);
    }
}
