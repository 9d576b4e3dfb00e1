// open-docs - app/launcher.rs
//
// Launch orchestration: resolve the documentation path, check it exists,
// classify the host, and hand the path to the matching opener.
//
// Flow: Start -> PathResolved -> PlatformDetected -> Opened | Failed.
// One attempt per run; no retries and nothing carried between runs.

use std::io::{self, Write};
use std::path::Path;

use crate::core::model::Dispatch;
use crate::core::opener::opener_for;
use crate::core::path;
use crate::core::runner::CommandRunner;
use crate::platform::config::AppConfig;
use crate::platform::probe::PlatformProbe;
use crate::util::error::{LaunchError, Result};

/// Opens documentation files in the host browser.
pub struct Launcher<R: CommandRunner> {
    runner: R,
    probe: PlatformProbe,
    generate_command: String,
}

impl<R: CommandRunner> Launcher<R> {
    pub fn new(runner: R, probe: PlatformProbe, generate_command: impl Into<String>) -> Self {
        Self {
            runner,
            probe,
            generate_command: generate_command.into(),
        }
    }

    /// Launcher configured from a validated `AppConfig`.
    pub fn from_config(runner: R, probe: PlatformProbe, config: &AppConfig) -> Self {
        Self::new(runner, probe, config.generate_command.clone())
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }

    /// Open `doc_path` (relative to the current directory, or absolute).
    pub fn open_in_browser(&self, doc_path: &Path) -> Result<Dispatch> {
        let abs_path = path::resolve(doc_path)?;
        tracing::debug!(path = %abs_path.display(), "Documentation path resolved");

        if !abs_path.is_file() {
            return Err(LaunchError::NotFound {
                path: abs_path,
                generate_command: self.generate_command.clone(),
            });
        }

        let platform = self.probe.detect()?;
        let Some(opener) = opener_for(&platform) else {
            return Err(LaunchError::Unsupported {
                platform: platform.label().to_string(),
                path: abs_path,
            });
        };

        let dispatch = opener.open(&abs_path, &self.runner)?;
        tracing::info!(
            platform = %dispatch.platform,
            target = %dispatch.target.display(),
            "Documentation dispatched to browser"
        );
        Ok(dispatch)
    }
}

/// Print the outcome of a launch and return the process exit status.
///
/// Success goes to `out`, diagnostics to `err`.
pub fn report(result: &Result<Dispatch>, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<i32> {
    match result {
        Ok(dispatch) => {
            writeln!(out, "{}", dispatch.message())?;
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Launch failed");
            writeln!(err, "{e}")?;
            Ok(e.exit_code())
        }
    }
}
