//! Raw ffprobe output types.
//!
//! Every field is optional: ffprobe omits fields freely depending on
//! container, codec, and muxer, and absence must never fail
//! deserialization. Normalization is responsible for filling the gaps;
//! these structs are read-only once parsed.

use std::collections::HashMap;

use serde::Deserialize;

/// Parsed `-show_streams` / `-show_format` output for one file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<RawStream>,
    pub format: Option<RawFormat>,
}

/// One entry of the ffprobe stream list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStream {
    pub index: Option<u32>,

    /// "video", "audio", "subtitle", ...
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,

    // Video fields
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub pix_fmt: Option<String>,
    /// "N:D" form, e.g. "8:9" for anamorphic DV.
    pub sample_aspect_ratio: Option<String>,
    pub display_aspect_ratio: Option<String>,
    /// "progressive", "tt", "bb", "tb", "bt", or "unknown".
    pub field_order: Option<String>,
    /// "N/D" form, e.g. "30000/1001".
    pub avg_frame_rate: Option<String>,
    pub r_frame_rate: Option<String>,
    pub color_space: Option<String>,
    pub color_transfer: Option<String>,
    pub color_primaries: Option<String>,

    // Audio fields (ffprobe reports sample_rate and bit_rate as strings)
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
    pub channel_layout: Option<String>,
    pub bit_rate: Option<String>,
}

impl RawStream {
    /// True when the stream is tagged as video.
    pub fn is_video(&self) -> bool {
        self.codec_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("video"))
    }

    /// Coded pixel area, treating missing dimensions as zero.
    pub fn pixel_area(&self) -> i64 {
        self.width.unwrap_or(0) * self.height.unwrap_or(0)
    }
}

/// Container-level `-show_format` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormat {
    pub filename: Option<String>,
    pub format_name: Option<String>,
    pub format_long_name: Option<String>,

    /// Seconds, reported by ffprobe as a decimal string.
    pub duration: Option<String>,
    /// Bytes, as a decimal string.
    pub size: Option<String>,
    pub bit_rate: Option<String>,
    pub nb_streams: Option<u32>,

    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RawFormat {
    /// Container duration in seconds, when present and parseable.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.as_deref().and_then(|d| d.parse::<f64>().ok())
    }

    /// Container size in bytes, when present and parseable.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.as_deref().and_then(|s| s.parse::<u64>().ok())
    }
}
