//! Project persistence: pretty-printed JSON, written atomically.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::project::{CURRENT_SCHEMA_VERSION, Project};

/// Saves `project` as pretty-printed JSON at `path`.
///
/// The bytes go to a temporary sibling first and are renamed over the
/// destination, so an interrupted save never leaves a truncated project
/// file behind. Parent directories are created as needed.
pub fn save(path: &Path, project: &Project) -> CoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let json = serde_json::to_string_pretty(project)
        .map_err(|e| CoreError::Json(format!("project serialization: {e}")))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| CoreError::Io(e.error))?;

    log::debug!("Project saved to {}", path.display());
    Ok(())
}

/// Loads a project, rejecting files written by a newer schema.
pub fn load(path: &Path) -> CoreResult<Project> {
    let json = fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&json)
        .map_err(|e| CoreError::Json(format!("project file {}: {e}", path.display())))?;

    if project.info.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(CoreError::SchemaTooNew {
            found: project.info.schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    Ok(project)
}
