// open-docs - platform/probe.rs
//
// Host inspection: OS name and the kernel identification file.

use std::io;
use std::path::{Path, PathBuf};

use crate::core::detect::mentions_wsl;
use crate::core::model::PlatformKind;
use crate::util::constants::KERNEL_VERSION_FILE;
use crate::util::error::{LaunchError, Result};

/// Returns true if the kernel identification file at `version_file`
/// carries a WSL marker.
///
/// A missing file means "not WSL" (every non-Linux host). Any other read
/// failure is returned to the caller.
pub fn detect_wsl(version_file: &Path) -> io::Result<bool> {
    match std::fs::read_to_string(version_file) {
        Ok(contents) => Ok(mentions_wsl(&contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// What to inspect when classifying the host.
///
/// `host()` reads the real machine; tests build one with a fake OS name and
/// a temporary identification file.
#[derive(Debug, Clone)]
pub struct PlatformProbe {
    os_name: String,
    version_file: PathBuf,
}

impl PlatformProbe {
    /// Probe for the running host.
    pub fn host() -> Self {
        Self::new(std::env::consts::OS, KERNEL_VERSION_FILE)
    }

    pub fn new(os_name: &str, version_file: impl Into<PathBuf>) -> Self {
        Self {
            os_name: os_name.to_string(),
            version_file: version_file.into(),
        }
    }

    /// Classify the host. WSL is checked before the OS name.
    pub fn detect(&self) -> Result<PlatformKind> {
        let is_wsl = detect_wsl(&self.version_file).map_err(|source| LaunchError::Detection {
            path: self.version_file.clone(),
            source,
        })?;
        let kind = PlatformKind::classify(&self.os_name, is_wsl);
        tracing::debug!(
            os = %self.os_name,
            wsl = is_wsl,
            platform = %kind,
            "Platform detected"
        );
        Ok(kind)
    }
}
