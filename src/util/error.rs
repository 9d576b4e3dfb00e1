// open-docs - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant renders as the operator-facing diagnostic printed on stderr.
// No dependencies on core, app, or platform layers.

use std::fmt;
use std::io;
use std::path::PathBuf;

use super::constants::FAILURE_EXIT_CODE;

/// Top-level error for a single documentation launch attempt.
#[derive(Debug)]
pub enum LaunchError {
    /// The documentation entry file does not exist.
    NotFound {
        path: PathBuf,
        generate_command: String,
    },

    /// A helper process could not be started or exited unsuccessfully.
    LaunchFailure {
        route: LaunchRoute,
        path: PathBuf,
        cause: LaunchCause,
    },

    /// The host platform has no opener.
    Unsupported { platform: String, path: PathBuf },

    /// The kernel identification file exists but could not be read.
    Detection { path: PathBuf, source: io::Error },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

/// Which opener route failed. Selects the wording of the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRoute {
    /// WSL: path translation followed by the Windows shell.
    WslInterop,
    /// Native Windows, Linux, or macOS opener.
    Native,
}

/// Why a helper process did not succeed.
#[derive(Debug)]
pub enum LaunchCause {
    /// The program could not be spawned at all (missing binary, permissions).
    Spawn { program: String, source: io::Error },

    /// The program ran and exited with a non-zero status.
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The program succeeded but produced no usable output.
    EmptyOutput { program: String },

    /// The OS shell association could not open the file.
    ShellOpen { source: io::Error },
}

impl LaunchError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

impl fmt::Display for LaunchCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "failed to run '{program}': {source}"),
            Self::ExitStatus {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "'{program}' exited with status {code}")?,
                    None => write!(f, "'{program}' was terminated by a signal")?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Self::EmptyOutput { program } => write!(f, "'{program}' returned an empty path"),
            Self::ShellOpen { source } => write!(f, "the shell could not open the file: {source}"),
        }
    }
}

impl std::error::Error for LaunchCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::ShellOpen { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound {
                path,
                generate_command,
            } => write!(
                f,
                "Error: Documentation file not found: {}\n\
                 Run '{generate_command}' first to generate documentation.",
                path.display()
            ),
            Self::LaunchFailure {
                route: LaunchRoute::WslInterop,
                cause,
                ..
            } => write!(f, "Error converting path or opening browser: {cause}"),
            Self::LaunchFailure {
                route: LaunchRoute::Native,
                path,
                cause,
            } => write!(
                f,
                "Error: Could not open browser ({cause}). Please open manually: {}",
                path.display()
            ),
            Self::Unsupported { platform, path } => write!(
                f,
                "Unsupported platform: {platform}\nPlease open manually: {}",
                path.display()
            ),
            Self::Detection { path, source } => write!(
                f,
                "Error: Could not read '{}' to detect the platform: {source}",
                path.display()
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LaunchFailure { cause, .. } => Some(cause),
            Self::Detection { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for launch results.
pub type Result<T> = std::result::Result<T, LaunchError>;
