use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ytdrop::extractor::StreamDescriptor;
use ytdrop::selector::{choose_best, parse_quality, rank_all};

/// Roughly the shape of a long YouTube listing: mostly adaptive, a few muxed
fn sample_streams(count: usize) -> Vec<StreamDescriptor> {
    const HEIGHTS: [u32; 8] = [144, 240, 360, 480, 720, 1080, 1440, 2160];
    (0..count)
        .map(|i| {
            let height = HEIGHTS[i % HEIGHTS.len()];
            StreamDescriptor {
                url: format!("https://rr1.googlevideo.com/videoplayback?itag={}", i),
                container: if i % 3 == 0 { "webm" } else { "mp4" }.to_string(),
                quality_label: Some(format!("{}p", height)),
                fps: Some(if i % 2 == 0 { 30 } else { 60 }),
                content_length: Some(height as u64 * 10_000),
                mime_type: "video/mp4".to_string(),
                bitrate: Some(height as f32 * 2.5),
                audio_bitrate: None,
                has_audio: i % 4 != 0,
                has_video: i % 5 != 0,
            }
        })
        .collect()
}

fn bench_parse_quality(c: &mut Criterion) {
    c.bench_function("parse_quality", |b| {
        b.iter(|| {
            parse_quality(black_box(Some("1080p60")));
            parse_quality(black_box(Some("medium")));
        })
    });
}

fn bench_choose_best(c: &mut Criterion) {
    let streams = sample_streams(60);
    c.bench_function("choose_best_60", |b| {
        b.iter(|| choose_best(black_box(&streams)))
    });
}

fn bench_rank_all(c: &mut Criterion) {
    let streams = sample_streams(60);
    c.bench_function("rank_all_60", |b| b.iter(|| rank_all(black_box(&streams))));

    let large = sample_streams(1_000);
    c.bench_function("rank_all_1000", |b| b.iter(|| rank_all(black_box(&large))));
}

criterion_group!(
    benches,
    bench_parse_quality,
    bench_choose_best,
    bench_rank_all
);
criterion_main!(benches);
