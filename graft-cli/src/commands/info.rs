//! Implementation of the `info` command: probe one file and print its
//! canonical descriptor alongside a few container-level facts.

use graft_core::CoreResult;
use graft_core::media::{self, Ffprobe};
use graft_core::utils::{format_bytes, format_decimal, format_duration};

use crate::cli::InfoArgs;

pub fn run_info(args: InfoArgs) -> CoreResult<()> {
    let probe = Ffprobe::execute(&args.file)?;
    let descriptor = media::normalize(&args.file, &probe)?;

    println!("File:            {}", descriptor.path.display());
    println!(
        "Stored raster:   {}x{}",
        descriptor.stored_width, descriptor.stored_height
    );

    if descriptor.frame_rate.is_valid() {
        println!(
            "Frame rate:      {} ({} fps)",
            descriptor.frame_rate,
            format_decimal(descriptor.frame_rate.to_f64())
        );
    } else {
        println!("Frame rate:      unknown");
    }

    let scan = match (descriptor.is_interlaced, descriptor.field_order.as_deref()) {
        (true, Some(order)) => format!("interlaced ({order})"),
        (true, None) => "interlaced".to_string(),
        (false, _) => "progressive".to_string(),
    };
    println!("Scan:            {scan}");

    println!("SAR:             {}", descriptor.sample_aspect_ratio);
    println!("DAR:             {}", descriptor.display_aspect_ratio);
    println!(
        "Pixel format:    {}",
        descriptor.pixel_format.as_deref().unwrap_or("unknown")
    );
    if descriptor.bit_depth != 0 {
        println!("Bit depth:       {}-bit", descriptor.bit_depth);
    } else {
        println!("Bit depth:       unknown");
    }
    println!(
        "Color:           space={} primaries={} transfer={}",
        descriptor.color_space.as_deref().unwrap_or("-"),
        descriptor.color_primaries.as_deref().unwrap_or("-"),
        descriptor.color_transfer.as_deref().unwrap_or("-")
    );
    println!(
        "Duration:        {}",
        format_duration(descriptor.duration_secs)
    );

    if let Some(format) = probe.format.as_ref() {
        if let Some(name) = format.format_name.as_deref() {
            println!("Container:       {name}");
        }
        if let Some(size) = format.size_bytes() {
            println!("Container size:  {}", format_bytes(size));
        }
    }

    Ok(())
}
