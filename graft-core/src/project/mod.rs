//! Project model: the saved state tying a reference/target pair to
//! their canonical descriptors and working paths.

pub mod store;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::media::VideoDescriptor;

/// Newest project schema this build reads and writes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub info: ProjectInfo,
    #[serde(default)]
    pub paths: ProjectPaths,
    #[serde(default)]
    pub videos: ProjectVideos,
}

impl Project {
    /// Creates an empty project stamped with the current schema version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ProjectInfo {
                name: name.into(),
                created_utc: Utc::now(),
                schema_version: CURRENT_SCHEMA_VERSION,
            },
            paths: ProjectPaths::default(),
            videos: ProjectVideos::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub created_utc: DateTime<Utc>,
    pub schema_version: u32,
}

/// Input and derived-artifact paths. Relative entries resolve against
/// the project file's directory (see [`PathResolver`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPaths {
    /// User-selected inputs (can be absolute).
    pub reference_path: PathBuf,
    pub target_path: PathBuf,

    /// Working directory, conventionally next to the project file.
    pub work_dir: PathBuf,

    /// Output artifact.
    pub output_video_path: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::new(),
            target_path: PathBuf::new(),
            work_dir: PathBuf::from("work"),
            output_video_path: PathBuf::from("output/combined.mp4"),
        }
    }
}

/// Canonical descriptors captured at probe time. Referenced files are
/// not re-checked for existence on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectVideos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<VideoDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<VideoDescriptor>,
}

/// Resolves project-relative paths against the project file's
/// directory.
pub struct PathResolver {
    project_root: PathBuf,
}

impl PathResolver {
    /// `project_file` is the path of the project JSON itself.
    pub fn new(project_file: &Path) -> Self {
        let project_root = project_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { project_root }
    }

    /// Absolute paths pass through; relative paths resolve against the
    /// project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolver() {
        let resolver = PathResolver::new(Path::new("/projects/film/film.graft.json"));
        assert_eq!(
            resolver.resolve(Path::new("work/ref.mkv")),
            PathBuf::from("/projects/film/work/ref.mkv")
        );
        assert_eq!(
            resolver.resolve(Path::new("/mnt/media/ref.mkv")),
            PathBuf::from("/mnt/media/ref.mkv")
        );

        // A bare filename has no parent directory component.
        let resolver = PathResolver::new(Path::new("film.graft.json"));
        assert_eq!(
            resolver.resolve(Path::new("work/ref.mkv")),
            PathBuf::from("./work/ref.mkv")
        );
    }
}
