//! Canonical per-file video metadata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rational::Rational;

/// Unit-consistent description of one probed video file.
///
/// Produced once by [`normalize`](crate::media::normalize::normalize)
/// and immutable afterwards. Width and height are the coded (stored)
/// raster, not the display raster; display geometry lives in the aspect
/// ratio fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
    pub path: PathBuf,

    pub stored_width: u32,
    pub stored_height: u32,

    /// The invalid sentinel when the probe reported no usable frame
    /// rate. Callers treat invalid as "unknown", never as zero fps.
    pub frame_rate: Rational,

    pub is_interlaced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_order: Option<String>,

    pub sample_aspect_ratio: Rational,
    /// Always valid: derived from the stored raster and SAR when the
    /// probe did not report it.
    pub display_aspect_ratio: Rational,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_format: Option<String>,
    /// Inferred from the pixel-format label; 0 when unknown.
    pub bit_depth: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_primaries: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_transfer: Option<String>,

    /// Container duration; 0.0 when the container did not report one.
    pub duration_secs: f64,
}
