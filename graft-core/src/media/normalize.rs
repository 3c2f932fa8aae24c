//! Conversion of raw probe output into a canonical [`VideoDescriptor`].
//!
//! ffprobe output is heterogeneous and partially missing depending on
//! container, codec, and muxer. Normalization applies one fallback rule
//! per field so every downstream consumer sees the same canonical
//! shape. Only a missing or geometry-less video stream is fatal; every
//! other gap degrades to a sentinel or default value.

use std::path::Path;

use crate::error::NormalizationError;
use crate::media::descriptor::VideoDescriptor;
use crate::media::raw::{ProbeOutput, RawStream};
use crate::rational::Rational;

/// Builds the canonical descriptor for `path` from raw probe output.
pub fn normalize(path: &Path, probe: &ProbeOutput) -> Result<VideoDescriptor, NormalizationError> {
    let video = pick_best_video_stream(probe).ok_or(NormalizationError::NoVideoStream)?;

    let stored_width = video.width.unwrap_or(0);
    let stored_height = video.height.unwrap_or(0);
    if stored_width <= 0 || stored_height <= 0 {
        return Err(NormalizationError::InvalidGeometry {
            width: stored_width,
            height: stored_height,
        });
    }

    // avg_frame_rate is the measured average; r_frame_rate is the
    // declared base rate. Prefer the average, and keep the invalid
    // sentinel when neither parses: unknown fps is not an error.
    let frame_rate = parse_rational_opt(video.avg_frame_rate.as_deref())
        .or_else(parse_rational_opt(video.r_frame_rate.as_deref()));

    // Square pixels assumed when SAR is absent or unparseable.
    let sample_aspect_ratio =
        parse_rational_opt(video.sample_aspect_ratio.as_deref()).or_else(Rational::new(1, 1));

    // DAR = (W * SAR) / H, as a single reduced fraction.
    let display_aspect_ratio =
        parse_rational_opt(video.display_aspect_ratio.as_deref()).or_else(Rational::reduce(
            stored_width * sample_aspect_ratio.numerator(),
            stored_height * sample_aspect_ratio.denominator(),
        ));

    let field_order = trimmed_non_empty(video.field_order.as_deref());
    let is_interlaced = field_order.as_deref().is_some_and(|order| {
        !order.eq_ignore_ascii_case("progressive") && !order.eq_ignore_ascii_case("unknown")
    });

    let pixel_format = trimmed_non_empty(video.pix_fmt.as_deref());
    let bit_depth = infer_bit_depth(pixel_format.as_deref());

    let duration_secs = probe
        .format
        .as_ref()
        .and_then(|f| f.duration_secs())
        .filter(|d| *d > 0.0)
        .unwrap_or(0.0);

    Ok(VideoDescriptor {
        path: path.to_path_buf(),
        stored_width: stored_width as u32,
        stored_height: stored_height as u32,
        frame_rate,
        is_interlaced,
        field_order,
        sample_aspect_ratio,
        display_aspect_ratio,
        pixel_format,
        bit_depth,
        color_space: trimmed_non_empty(video.color_space.as_deref()),
        color_primaries: trimmed_non_empty(video.color_primaries.as_deref()),
        color_transfer: trimmed_non_empty(video.color_transfer.as_deref()),
        duration_secs,
    })
}

/// Picks the video stream with the largest coded area; ties keep the
/// earliest stream in probe order.
fn pick_best_video_stream(probe: &ProbeOutput) -> Option<&RawStream> {
    let mut best: Option<&RawStream> = None;
    for stream in probe.streams.iter().filter(|s| s.is_video()) {
        match best {
            Some(current) if stream.pixel_area() <= current.pixel_area() => {}
            _ => best = Some(stream),
        }
    }
    best
}

/// Infers the sample bit depth from an ffmpeg pixel-format label.
///
/// `yuv420p10le` → 10, `yuv422p12le` → 12, `gbrp16le` → 16. A digit run
/// directly after `'p'` is the per-sample depth; the 420/422/444 runs
/// are chroma subsampling codes, not depths, and mean 8-bit samples.
/// Returns 0 for an absent label (unknown).
pub fn infer_bit_depth(pix_fmt: Option<&str>) -> u32 {
    let Some(label) = pix_fmt.map(str::trim).filter(|l| !l.is_empty()) else {
        return 0;
    };

    if let Some(p_index) = label.find('p') {
        let digits = take_digit_run(&label[p_index + 1..]);
        if !digits.is_empty() {
            if let Ok(depth) = digits.parse::<u32>() {
                return depth;
            }
        }
    }

    // No depth suffix. The first digit run in labels like "yuv420p" is
    // the chroma subsampling code.
    let first_digits = label
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| take_digit_run(&label[i..]));
    if let Some(digits) = first_digits {
        if matches!(digits.parse::<u32>(), Ok(420 | 422 | 444)) {
            return 8;
        }
    }

    8
}

fn take_digit_run(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

fn parse_rational_opt(text: Option<&str>) -> Rational {
    match text {
        Some(text) => Rational::parse(text),
        None => Rational::INVALID,
    }
}

fn trimmed_non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_bit_depth() {
        assert_eq!(infer_bit_depth(None), 0);
        assert_eq!(infer_bit_depth(Some("")), 0);
        assert_eq!(infer_bit_depth(Some("  ")), 0);
        assert_eq!(infer_bit_depth(Some("yuv420p")), 8);
        assert_eq!(infer_bit_depth(Some("yuvj420p")), 8);
        assert_eq!(infer_bit_depth(Some("yuv420p10le")), 10);
        assert_eq!(infer_bit_depth(Some("yuv422p12le")), 12);
        assert_eq!(infer_bit_depth(Some("yuv444p16be")), 16);
        assert_eq!(infer_bit_depth(Some("gbrp16le")), 16);
        // p010le: depth digits follow the leading 'p'.
        assert_eq!(infer_bit_depth(Some("p010le")), 10);
        // No planar marker, no chroma code: common default.
        assert_eq!(infer_bit_depth(Some("rgb24")), 8);
        assert_eq!(infer_bit_depth(Some("nv12")), 8);
    }

    #[test]
    fn test_pick_best_video_stream_prefers_largest_area() {
        let probe = ProbeOutput {
            streams: vec![
                RawStream {
                    codec_type: Some("video".to_string()),
                    width: Some(1280),
                    height: Some(720),
                    ..Default::default()
                },
                RawStream {
                    codec_type: Some("audio".to_string()),
                    ..Default::default()
                },
                RawStream {
                    codec_type: Some("video".to_string()),
                    width: Some(1920),
                    height: Some(1080),
                    ..Default::default()
                },
            ],
            format: None,
        };

        let best = pick_best_video_stream(&probe).unwrap();
        assert_eq!(best.width, Some(1920));
    }

    #[test]
    fn test_pick_best_video_stream_tie_keeps_first() {
        let probe = ProbeOutput {
            streams: vec![
                RawStream {
                    index: Some(0),
                    codec_type: Some("video".to_string()),
                    width: Some(1920),
                    height: Some(1080),
                    ..Default::default()
                },
                RawStream {
                    index: Some(1),
                    codec_type: Some("video".to_string()),
                    width: Some(1920),
                    height: Some(1080),
                    ..Default::default()
                },
            ],
            format: None,
        };

        assert_eq!(pick_best_video_stream(&probe).unwrap().index, Some(0));
    }
}
