//! ffprobe execution and probe-result caching.
//!
//! Everything that touches the external tool lives here; the rest of
//! the core consumes the parsed [`ProbeOutput`] and performs no I/O.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::media::raw::ProbeOutput;

/// FFprobe command executor
pub struct Ffprobe;

impl Ffprobe {
    /// Probes `input_path` and returns the raw stream/format metadata.
    pub fn execute<P: AsRef<Path>>(input_path: P) -> CoreResult<ProbeOutput> {
        let path = input_path.as_ref();

        if !path.exists() {
            return Err(CoreError::InputNotFound(path.display().to_string()));
        }

        let mut cmd = Command::new("ffprobe");
        cmd.args([
            "-hide_banner",
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ]);
        cmd.arg(path);

        log::debug!("Running ffprobe on {}", path.display());

        let output = cmd
            .output()
            .map_err(|e| CoreError::CommandStart("ffprobe".to_string(), e))?;

        if !output.status.success() {
            return Err(CoreError::CommandFailed(
                "ffprobe".to_string(),
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| CoreError::Json(format!("ffprobe output: {e}")))
    }
}

/// Caches probe results per path so repeated lookups within one run do
/// not re-execute the tool.
#[derive(Default)]
pub struct ProbeSession {
    cache: Mutex<HashMap<PathBuf, ProbeOutput>>,
}

impl ProbeSession {
    /// Create a new probe session
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the probe output for `path`, probing on first use.
    pub fn probe<P: AsRef<Path>>(&self, path: P) -> CoreResult<ProbeOutput> {
        let path = path.as_ref();

        {
            let cache = self.cache.lock().unwrap();
            if let Some(output) = cache.get(path) {
                return Ok(output.clone());
            }
        }

        let output = Ffprobe::execute(path)?;
        self.cache
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), output.clone());
        Ok(output)
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }
}
