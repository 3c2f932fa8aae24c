//! Core library for video detail-transfer preflight.
//!
//! Given a reference file (the graded master whose fine detail should
//! be transplanted) and a target file (a differently graded version of
//! the same content), this crate probes both with ffprobe, normalizes
//! the heterogeneous metadata into canonical [`VideoDescriptor`]s, and
//! diagnoses obstacles to frame-accurate alignment and detail transfer.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use graft_core::media::{self, Ffprobe};
//!
//! # fn main() -> graft_core::CoreResult<()> {
//! let reference = Path::new("master.mkv");
//! let target = Path::new("retail.mkv");
//!
//! let ref_desc = media::normalize(reference, &Ffprobe::execute(reference)?)?;
//! let tgt_desc = media::normalize(target, &Ffprobe::execute(target)?)?;
//!
//! for warning in graft_core::compat::check(&ref_desc, &tgt_desc) {
//!     eprintln!("{warning}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod compat;
pub mod error;
pub mod media;
pub mod project;
pub mod rational;
pub mod utils;

// Re-exports for public API
pub use compat::check;
pub use error::{CoreError, CoreResult, NormalizationError};
pub use media::{Ffprobe, ProbeOutput, ProbeSession, VideoDescriptor, normalize};
pub use project::{CURRENT_SCHEMA_VERSION, PathResolver, Project};
pub use rational::Rational;
pub use utils::{format_bytes, format_decimal, format_duration};
