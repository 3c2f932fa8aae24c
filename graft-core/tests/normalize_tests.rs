// graft-core/tests/normalize_tests.rs

use std::path::Path;

use graft_core::NormalizationError;
use graft_core::Rational;
use graft_core::media::{ProbeOutput, RawFormat, RawStream, normalize};

fn video_stream(width: i64, height: i64) -> RawStream {
    RawStream {
        codec_type: Some("video".to_string()),
        width: Some(width),
        height: Some(height),
        ..Default::default()
    }
}

fn probe_with(streams: Vec<RawStream>) -> ProbeOutput {
    ProbeOutput {
        streams,
        format: None,
    }
}

#[test]
fn test_selects_largest_video_stream() {
    let mut small = video_stream(1280, 720);
    small.avg_frame_rate = Some("25/1".to_string());
    let mut large = video_stream(1920, 1080);
    large.avg_frame_rate = Some("30000/1001".to_string());

    let probe = probe_with(vec![small, large]);
    let descriptor = normalize(Path::new("in.mkv"), &probe).unwrap();

    assert_eq!(descriptor.stored_width, 1920);
    assert_eq!(descriptor.stored_height, 1080);
    assert_eq!(descriptor.frame_rate, Rational::reduce(30000, 1001));
}

#[test]
fn test_no_video_stream_is_fatal() {
    let audio = RawStream {
        codec_type: Some("audio".to_string()),
        ..Default::default()
    };
    let untyped = RawStream::default();

    let err = normalize(Path::new("in.mkv"), &probe_with(vec![audio, untyped])).unwrap_err();
    assert_eq!(err, NormalizationError::NoVideoStream);
}

#[test]
fn test_missing_geometry_is_fatal() {
    let stream = RawStream {
        codec_type: Some("video".to_string()),
        ..Default::default()
    };

    let err = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap_err();
    assert_eq!(
        err,
        NormalizationError::InvalidGeometry {
            width: 0,
            height: 0
        }
    );
}

#[test]
fn test_frame_rate_fallback_chain() {
    // ffprobe emits "0/0" for an unknown average rate.
    let mut stream = video_stream(1920, 1080);
    stream.avg_frame_rate = Some("0/0".to_string());
    stream.r_frame_rate = Some("24000/1001".to_string());

    let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
    assert_eq!(descriptor.frame_rate, Rational::reduce(24000, 1001));

    // Both unusable: the sentinel is stored, normalization still succeeds.
    let mut stream = video_stream(1920, 1080);
    stream.avg_frame_rate = Some("0/0".to_string());
    let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
    assert!(!descriptor.frame_rate.is_valid());
}

#[test]
fn test_sar_defaults_to_square_pixels() {
    let descriptor =
        normalize(Path::new("in.mkv"), &probe_with(vec![video_stream(1920, 1080)])).unwrap();
    assert_eq!(descriptor.sample_aspect_ratio, Rational::new(1, 1));
}

#[test]
fn test_dar_derived_from_raster_and_sar() {
    // Anamorphic HDV: 1440x1080 with SAR 4:3 displays as 16:9.
    let mut stream = video_stream(1440, 1080);
    stream.sample_aspect_ratio = Some("4:3".to_string());

    let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
    assert_eq!(descriptor.display_aspect_ratio, Rational::new(16, 9));

    // A reported DAR wins over derivation.
    let mut stream = video_stream(1440, 1080);
    stream.sample_aspect_ratio = Some("4:3".to_string());
    stream.display_aspect_ratio = Some("4:3".to_string());
    let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
    assert_eq!(descriptor.display_aspect_ratio, Rational::new(4, 3));
}

#[test]
fn test_interlace_detection() {
    for (field_order, interlaced) in [
        (None, false),
        (Some("progressive"), false),
        (Some("Progressive"), false),
        (Some("unknown"), false),
        (Some("  "), false),
        (Some("tt"), true),
        (Some("bb"), true),
        (Some("tb"), true),
    ] {
        let mut stream = video_stream(720, 576);
        stream.field_order = field_order.map(str::to_string);
        let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
        assert_eq!(
            descriptor.is_interlaced, interlaced,
            "field_order {field_order:?}"
        );
    }
}

#[test]
fn test_bit_depth_from_pixel_format() {
    for (pix_fmt, depth) in [
        (None, 0),
        (Some("yuv420p"), 8),
        (Some("yuv420p10le"), 10),
        (Some("yuv422p12le"), 12),
        (Some("gbrp16le"), 16),
    ] {
        let mut stream = video_stream(1920, 1080);
        stream.pix_fmt = pix_fmt.map(str::to_string);
        let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
        assert_eq!(descriptor.bit_depth, depth, "pix_fmt {pix_fmt:?}");
    }
}

#[test]
fn test_color_labels_trimmed_and_blank_dropped() {
    let mut stream = video_stream(1920, 1080);
    stream.color_space = Some(" bt709 ".to_string());
    stream.color_primaries = Some("".to_string());
    stream.color_transfer = None;

    let descriptor = normalize(Path::new("in.mkv"), &probe_with(vec![stream])).unwrap();
    assert_eq!(descriptor.color_space.as_deref(), Some("bt709"));
    assert_eq!(descriptor.color_primaries, None);
    assert_eq!(descriptor.color_transfer, None);
}

#[test]
fn test_duration_from_container() {
    let probe = ProbeOutput {
        streams: vec![video_stream(1920, 1080)],
        format: Some(RawFormat {
            duration: Some("4141.208000".to_string()),
            ..Default::default()
        }),
    };
    let descriptor = normalize(Path::new("in.mkv"), &probe).unwrap();
    assert!((descriptor.duration_secs - 4141.208).abs() < 1e-9);

    // Missing or non-positive durations become zero, not an error.
    for duration in [None, Some("-3.5"), Some("0"), Some("garbage")] {
        let probe = ProbeOutput {
            streams: vec![video_stream(1920, 1080)],
            format: Some(RawFormat {
                duration: duration.map(str::to_string),
                ..Default::default()
            }),
        };
        let descriptor = normalize(Path::new("in.mkv"), &probe).unwrap();
        assert_eq!(descriptor.duration_secs, 0.0, "duration {duration:?}");
    }
}

#[test]
fn test_path_is_carried_through() {
    let descriptor =
        normalize(Path::new("/media/ref.mkv"), &probe_with(vec![video_stream(64, 64)])).unwrap();
    assert_eq!(descriptor.path, Path::new("/media/ref.mkv"));
}
