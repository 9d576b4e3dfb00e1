// open-docs - core/opener.rs
//
// One browser opener per supported platform behind a common trait.
// Openers only describe and check helper invocations; spawning is
// delegated to the `CommandRunner` they are given.
//
// Platform behaviour:
// - **WSL**: `wslpath -w <path>`, then PowerShell `Start-Process` on the
//   Windows path quoted as a single-quoted literal.
// - **Windows**: shell association through `CommandRunner::shell_open`.
// - **Linux**: `xdg-open <path>`.
// - **macOS**: `open <path>`.
//
// No route passes the path through cmd.exe, whose parser splits on `&`
// and expands `%VAR%` in file names.

use std::path::{Path, PathBuf};

use crate::core::model::{Dispatch, PlatformKind};
use crate::core::runner::{CommandOutput, CommandRunner, Invocation};
use crate::util::constants::{
    MACOS_OPEN_PROGRAM, WSLPATH_PROGRAM, WSL_POWERSHELL_PROGRAM, XDG_OPEN_PROGRAM,
};
use crate::util::error::{LaunchCause, LaunchError, LaunchRoute, Result};

/// Opens a local file in the platform's default browser.
pub trait BrowserOpener {
    /// Platform this opener serves.
    fn platform(&self) -> PlatformKind;

    /// Dispatch `path` (absolute, known to exist) to the browser.
    fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<Dispatch>;
}

/// Select the opener for a classified platform. `None` for unsupported hosts.
pub fn opener_for(kind: &PlatformKind) -> Option<&'static dyn BrowserOpener> {
    match kind {
        PlatformKind::Wsl => Some(&WslOpener),
        PlatformKind::Windows => Some(&WindowsOpener),
        PlatformKind::Linux => Some(&LinuxOpener),
        PlatformKind::MacOs => Some(&MacOpener),
        PlatformKind::Unsupported(_) => None,
    }
}

/// Run a helper and turn spawn failures and non-zero exits into
/// `LaunchFailure` errors.
fn run_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
    route: LaunchRoute,
    path: &Path,
) -> Result<CommandOutput> {
    tracing::debug!(command = %invocation, "Running helper");

    let failure = |cause: LaunchCause| LaunchError::LaunchFailure {
        route,
        path: path.to_path_buf(),
        cause,
    };

    let output = runner.run(invocation).map_err(|source| {
        failure(LaunchCause::Spawn {
            program: invocation.program.clone(),
            source,
        })
    })?;

    if !output.is_success() {
        tracing::debug!(
            program = %invocation.program,
            code = ?output.code,
            "Helper exited unsuccessfully"
        );
        return Err(failure(LaunchCause::ExitStatus {
            program: invocation.program.clone(),
            code: output.code,
            stderr: output.stderr,
        }));
    }

    Ok(output)
}

/// Single-helper native opener shared by Linux and macOS.
fn open_native(
    platform: PlatformKind,
    invocation: Invocation,
    path: &Path,
    runner: &dyn CommandRunner,
) -> Result<Dispatch> {
    run_checked(runner, &invocation, LaunchRoute::Native, path)?;
    Ok(Dispatch {
        platform,
        target: path.to_path_buf(),
    })
}

// =============================================================================
// WSL
// =============================================================================

/// Opens through Windows interop from inside WSL.
#[derive(Debug, Clone, Copy, Default)]
pub struct WslOpener;

impl BrowserOpener for WslOpener {
    fn platform(&self) -> PlatformKind {
        PlatformKind::Wsl
    }

    fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<Dispatch> {
        let translate = Invocation::new(WSLPATH_PROGRAM)
            .arg("-w")
            .arg(path)
            .captured();
        let output = run_checked(runner, &translate, LaunchRoute::WslInterop, path)?;

        let windows_path = output.stdout.trim();
        if windows_path.is_empty() {
            return Err(LaunchError::LaunchFailure {
                route: LaunchRoute::WslInterop,
                path: path.to_path_buf(),
                cause: LaunchCause::EmptyOutput {
                    program: WSLPATH_PROGRAM.to_string(),
                },
            });
        }
        tracing::debug!(windows_path, "Translated path for Windows");

        let start = Invocation::new(WSL_POWERSHELL_PROGRAM)
            .arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(start_process_command(windows_path));
        run_checked(runner, &start, LaunchRoute::WslInterop, path)?;

        Ok(Dispatch {
            platform: PlatformKind::Wsl,
            target: PathBuf::from(windows_path),
        })
    }
}

/// PowerShell command opening `windows_path` with its associated application.
///
/// The path becomes a single-quoted literal: nothing inside is expanded, and
/// the only escape is doubling the quote. PowerShell also treats the
/// typographic single quotes as quote characters, so those are doubled too.
fn start_process_command(windows_path: &str) -> String {
    let mut literal = String::with_capacity(windows_path.len() + 2);
    literal.push('\'');
    for c in windows_path.chars() {
        if matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}') {
            literal.push(c);
        }
        literal.push(c);
    }
    literal.push('\'');
    format!("Start-Process -FilePath {literal} -ErrorAction Stop")
}

// =============================================================================
// Native
// =============================================================================

/// Opens through the Windows shell file association.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsOpener;

impl BrowserOpener for WindowsOpener {
    fn platform(&self) -> PlatformKind {
        PlatformKind::Windows
    }

    fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<Dispatch> {
        tracing::debug!(path = %path.display(), "Opening through shell association");
        runner
            .shell_open(path)
            .map_err(|source| LaunchError::LaunchFailure {
                route: LaunchRoute::Native,
                path: path.to_path_buf(),
                cause: LaunchCause::ShellOpen { source },
            })?;
        Ok(Dispatch {
            platform: PlatformKind::Windows,
            target: path.to_path_buf(),
        })
    }
}

/// Opens through the freedesktop `xdg-open` helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxOpener;

impl BrowserOpener for LinuxOpener {
    fn platform(&self) -> PlatformKind {
        PlatformKind::Linux
    }

    fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<Dispatch> {
        open_native(
            self.platform(),
            Invocation::new(XDG_OPEN_PROGRAM).arg(path),
            path,
            runner,
        )
    }
}

/// Opens through the macOS `open` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOpener;

impl BrowserOpener for MacOpener {
    fn platform(&self) -> PlatformKind {
        PlatformKind::MacOs
    }

    fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<Dispatch> {
        open_native(
            self.platform(),
            Invocation::new(MACOS_OPEN_PROGRAM).arg(path),
            path,
            runner,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::ScriptedRunner;
    use std::ffi::OsString;
    use std::io;

    fn doc() -> PathBuf {
        PathBuf::from("/home/dev/nu/docs/rust/nu_analytics/index.html")
    }

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn every_supported_platform_has_an_opener() {
        for kind in [
            PlatformKind::Wsl,
            PlatformKind::Windows,
            PlatformKind::Linux,
            PlatformKind::MacOs,
        ] {
            let opener = opener_for(&kind).expect("opener");
            assert_eq!(opener.platform(), kind);
        }
        assert!(opener_for(&PlatformKind::Unsupported("Plan9".into())).is_none());
    }

    #[test]
    fn wsl_translates_then_starts() {
        let runner = ScriptedRunner::replying(vec![
            Ok(CommandOutput::success(
                "\\\\wsl.localhost\\Ubuntu\\home\\dev\\nu\\docs\\rust\\nu_analytics\\index.html\n",
            )),
            Ok(CommandOutput::success("")),
        ]);

        let dispatch = WslOpener.open(&doc(), &runner).unwrap();

        let win = "\\\\wsl.localhost\\Ubuntu\\home\\dev\\nu\\docs\\rust\\nu_analytics\\index.html";
        assert_eq!(dispatch.platform, PlatformKind::Wsl);
        assert_eq!(dispatch.target, PathBuf::from(win));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "wslpath");
        assert_eq!(
            calls[0].args,
            os(&["-w", "/home/dev/nu/docs/rust/nu_analytics/index.html"])
        );
        assert!(calls[0].capture);
        assert_eq!(calls[1].program, "powershell.exe");
        let command = format!("Start-Process -FilePath '{win}' -ErrorAction Stop");
        assert_eq!(
            calls[1].args,
            os(&["-NoProfile", "-NonInteractive", "-Command", &command])
        );
    }

    #[test]
    fn wsl_path_with_shell_metacharacters_stays_one_literal() {
        let runner = ScriptedRunner::replying(vec![
            Ok(CommandOutput::success(
                "C:\\R&D\\100%USERNAME%\\a^b $x\\O'Brien\\index.html\n",
            )),
            Ok(CommandOutput::success("")),
        ]);

        WslOpener.open(&doc(), &runner).unwrap();

        let calls = runner.calls();
        assert_eq!(
            calls[1].args,
            os(&[
                "-NoProfile",
                "-NonInteractive",
                "-Command",
                "Start-Process -FilePath 'C:\\R&D\\100%USERNAME%\\a^b $x\\O''Brien\\index.html' -ErrorAction Stop",
            ])
        );
    }

    #[test]
    fn start_process_literal_doubles_every_single_quote_form() {
        assert_eq!(
            start_process_command("C:\\it\u{2019}s\\a'b"),
            "Start-Process -FilePath 'C:\\it\u{2019}\u{2019}s\\a''b' -ErrorAction Stop"
        );
    }

    #[test]
    fn wsl_translation_failure_stops_before_shell() {
        let runner = ScriptedRunner::replying(vec![Ok(CommandOutput::failure(
            1,
            "wslpath: /home/dev/nu: Invalid argument",
        ))]);

        let err = WslOpener.open(&doc(), &runner).unwrap_err();

        assert_eq!(runner.calls().len(), 1);
        assert!(matches!(
            err,
            LaunchError::LaunchFailure {
                route: LaunchRoute::WslInterop,
                cause: LaunchCause::ExitStatus { code: Some(1), .. },
                ..
            }
        ));
        assert!(err
            .to_string()
            .starts_with("Error converting path or opening browser:"));
    }

    #[test]
    fn wsl_empty_translation_is_a_failure() {
        let runner = ScriptedRunner::replying(vec![Ok(CommandOutput::success("  \n"))]);
        let err = WslOpener.open(&doc(), &runner).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::LaunchFailure {
                cause: LaunchCause::EmptyOutput { .. },
                ..
            }
        ));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn wsl_shell_failure_is_reported() {
        let runner = ScriptedRunner::replying(vec![
            Ok(CommandOutput::success("C:\\docs\\index.html")),
            Ok(CommandOutput::failure(9009, "")),
        ]);
        let err = WslOpener.open(&doc(), &runner).unwrap_err();
        assert!(err
            .to_string()
            .contains("'powershell.exe' exited with status 9009"));
    }

    #[test]
    fn linux_runs_xdg_open_on_the_path() {
        let runner = ScriptedRunner::default();
        let dispatch = LinuxOpener.open(&doc(), &runner).unwrap();
        assert_eq!(dispatch.target, doc());
        let calls = runner.calls();
        assert_eq!(calls[0].program, "xdg-open");
        assert_eq!(calls[0].args, vec![doc().into_os_string()]);
        assert!(!calls[0].capture);
    }

    #[test]
    fn linux_non_zero_exit_offers_manual_fallback() {
        let runner = ScriptedRunner::replying(vec![Ok(CommandOutput::failure(3, ""))]);
        let err = LinuxOpener.open(&doc(), &runner).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Could not open browser"));
        assert!(msg.contains("Please open manually: /home/dev/nu/docs/rust/nu_analytics/index.html"));
    }

    #[test]
    fn missing_helper_binary_is_a_spawn_failure() {
        let runner = ScriptedRunner::replying(vec![Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ))]);
        let err = MacOpener.open(&doc(), &runner).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::LaunchFailure {
                route: LaunchRoute::Native,
                cause: LaunchCause::Spawn { .. },
                ..
            }
        ));
        assert!(err.to_string().contains("failed to run 'open'"));
    }

    #[test]
    fn windows_hands_the_exact_path_to_shell_association() {
        let runner = ScriptedRunner::default();
        let path = PathBuf::from(r"C:\R&D\%TEMP%\docs\rust\nu_analytics\index.html");
        let dispatch = WindowsOpener.open(&path, &runner).unwrap();
        assert_eq!(dispatch.platform, PlatformKind::Windows);
        assert_eq!(dispatch.target, path);
        assert_eq!(runner.shell_opened(), vec![path]);
        assert!(runner.calls().is_empty(), "no command interpreter involved");
    }

    #[test]
    fn windows_failure_is_reported_not_swallowed() {
        let runner =
            ScriptedRunner::replying(vec![Ok(CommandOutput::failure(1, "no association"))]);
        let err = WindowsOpener.open(&doc(), &runner).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::LaunchFailure {
                route: LaunchRoute::Native,
                cause: LaunchCause::ShellOpen { .. },
                ..
            }
        ));
        let msg = err.to_string();
        assert!(msg.contains("Could not open browser"));
        assert!(msg.contains("no association"));
    }

    #[test]
    fn macos_runs_open_on_the_path() {
        let runner = ScriptedRunner::default();
        MacOpener.open(&doc(), &runner).unwrap();
        assert_eq!(runner.calls()[0].program, "open");
    }
}
