// open-docs - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "open-docs";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "open-docs";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Documentation target
// =============================================================================

/// Documentation entry file, relative to the invocation directory.
pub const DEFAULT_DOC_PATH: &str = "docs/rust/nu_analytics/index.html";

/// Command the operator is told to run when the documentation is missing.
pub const DEFAULT_GENERATE_COMMAND: &str = "npm run docs";

// =============================================================================
// Platform detection
// =============================================================================

/// Kernel identification file inspected for the WSL marker.
pub const KERNEL_VERSION_FILE: &str = "/proc/version";

/// Lowercase substrings of the kernel version string that identify WSL.
pub const WSL_MARKERS: &[&str] = &["microsoft", "wsl"];

// =============================================================================
// Helper programs
// =============================================================================

/// WSL path translator (Unix path -> Windows path).
pub const WSLPATH_PROGRAM: &str = "wslpath";

/// Windows PowerShell as reachable from inside WSL. Used for
/// `Start-Process` so the path never passes through cmd.exe parsing.
pub const WSL_POWERSHELL_PROGRAM: &str = "powershell.exe";

/// Freedesktop opener on native Linux.
pub const XDG_OPEN_PROGRAM: &str = "xdg-open";

/// Native macOS opener.
pub const MACOS_OPEN_PROGRAM: &str = "open";

// =============================================================================
// Logging and configuration
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Config file name, located in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Process exit status for every reported failure.
pub const FAILURE_EXIT_CODE: i32 = 1;
