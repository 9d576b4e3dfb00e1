// open-docs - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Platform classification
// =============================================================================

/// Runtime platform, as far as opening a browser is concerned.
///
/// WSL is its own variant: a WSL kernel reports itself as Linux, but the
/// browser lives on the Windows side and is reached through interop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Wsl,
    Windows,
    Linux,
    MacOs,
    /// Anything else. Carries the platform name as `uname` spells it when
    /// known, otherwise as detected.
    Unsupported(String),
}

impl PlatformKind {
    /// Human-readable platform name.
    pub fn label(&self) -> &str {
        match self {
            Self::Wsl => "WSL",
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Launch outcome
// =============================================================================

/// A successful launch dispatch.
///
/// Dispatch means the OS opener accepted the request; it does not confirm
/// that the browser actually came up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Platform the opener ran on.
    pub platform: PlatformKind,

    /// Path handed to the opener. Under WSL this is the translated
    /// Windows path; everywhere else the resolved absolute path.
    pub target: PathBuf,
}

impl Dispatch {
    /// Confirmation line printed on stdout.
    pub fn message(&self) -> &'static str {
        match self.platform {
            PlatformKind::Wsl => "Opening documentation in Windows browser...",
            _ => "Opening documentation in default browser...",
        }
    }
}
