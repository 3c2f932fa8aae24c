//! Compatibility diagnosis between two canonical descriptors.
//!
//! Detail transfer assumes the reference and target depict the same
//! content frame for frame. Each check below flags one independent
//! obstacle to that assumption. The output is advisory: an empty list
//! is a successful result, and no warning implies another.

use crate::media::descriptor::VideoDescriptor;
use crate::utils::format_decimal;

/// Frame rates closer than this (in decimal fps) are treated as equal.
/// Plenty for the common exact rationals.
pub const FPS_TOLERANCE: f64 = 0.01;

/// Container durations closer than this many seconds are treated as
/// equal.
pub const DURATION_TOLERANCE_SECS: f64 = 0.5;

/// Compares two descriptors and returns human-readable warnings.
///
/// The check order is fixed: interlacing, frame rate, duration, bit
/// depth, color space, transfer, primaries, sample aspect ratio.
/// Identical descriptors produce an empty list. Pure function, no side
/// effects.
pub fn check(reference: &VideoDescriptor, target: &VideoDescriptor) -> Vec<String> {
    let mut warnings = Vec::new();

    // Interlace / IVTC
    if reference.is_interlaced {
        warnings.push(
            "Reference is interlaced; IVTC/detelecine (or deinterlace) is required before \
             reliable frame matching."
                .to_string(),
        );
    }

    // Frame rate mismatch; skipped when either side is unknown.
    if reference.frame_rate.is_valid() && target.frame_rate.is_valid() {
        let ref_fps = reference.frame_rate.to_f64();
        let tgt_fps = target.frame_rate.to_f64();
        if (ref_fps - tgt_fps).abs() > FPS_TOLERANCE {
            warnings.push(format!(
                "Frame rate mismatch (reference {} fps vs target {} fps). Expect non-1:1 \
                 mapping without normalization.",
                format_decimal(ref_fps),
                format_decimal(tgt_fps)
            ));
        }
    }

    // Duration mismatch: container-level symptom of edits.
    let duration_diff = (reference.duration_secs - target.duration_secs).abs();
    if duration_diff > DURATION_TOLERANCE_SECS {
        warnings.push(format!(
            "Duration differs by ~{}s. Expect edits/extra frames; use piecewise time alignment.",
            format_decimal(duration_diff)
        ));
    }

    // Bit depth mismatch; 0 means unknown and suppresses the check.
    if reference.bit_depth != 0 && target.bit_depth != 0 && reference.bit_depth != target.bit_depth
    {
        warnings.push(format!(
            "Bit depth mismatch (reference {}-bit vs target {}-bit). Use float/linear pipeline; \
             output encode should be ≥10-bit to avoid banding.",
            reference.bit_depth, target.bit_depth
        ));
    }

    // Color hints: only compared when both sides carry the label.
    if let Some((ref_cs, tgt_cs)) = differing_labels(&reference.color_space, &target.color_space) {
        warnings.push(format!(
            "Color space differs (reference {ref_cs} vs target {tgt_cs}). Expect different \
             luma/chroma behavior; match in linear light carefully."
        ));
    }

    if let Some((ref_trc, tgt_trc)) =
        differing_labels(&reference.color_transfer, &target.color_transfer)
    {
        warnings.push(format!(
            "Transfer characteristics differ (reference {ref_trc} vs target {tgt_trc}). Gamma \
             mismatch may affect matching/transfer if not linearized correctly."
        ));
    }

    if let Some((ref_pri, tgt_pri)) =
        differing_labels(&reference.color_primaries, &target.color_primaries)
    {
        warnings.push(format!(
            "Color primaries differ (reference {ref_pri} vs target {tgt_pri}). Consider color \
             management if you later do chroma operations."
        ));
    }

    // SAR: exact fraction inequality, not a numeric tolerance. The
    // reference may be anamorphic (e.g. 8:9) against a square-pixel
    // target.
    if reference.sample_aspect_ratio.is_valid()
        && target.sample_aspect_ratio.is_valid()
        && reference.sample_aspect_ratio != target.sample_aspect_ratio
    {
        warnings.push(format!(
            "Sample aspect ratio differs (reference {} vs target {}). Treat reference as \
             anamorphic; do alignment in stored raster then compose with output scaling.",
            reference.sample_aspect_ratio, target.sample_aspect_ratio
        ));
    }

    warnings
}

/// Both labels present and different after trimming and case folding.
fn differing_labels<'a>(
    reference: &'a Option<String>,
    target: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    let reference = reference.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let target = target.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    if reference.eq_ignore_ascii_case(target) {
        None
    } else {
        Some((reference, target))
    }
}
