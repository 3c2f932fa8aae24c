//! Media metadata: raw probe output, canonical descriptors, and the
//! normalization rules between them.

pub mod descriptor;
pub mod normalize;
pub mod probe;
pub mod raw;

// Re-export commonly used types
pub use descriptor::VideoDescriptor;
pub use normalize::normalize;
pub use probe::{Ffprobe, ProbeSession};
pub use raw::{ProbeOutput, RawFormat, RawStream};
