// open-docs - platform/process.rs
//
// `CommandRunner` backed by `std::process::Command` for helpers and the
// `open` crate for shell association (ShellExecuteW on Windows). Blocks
// until the helper exits; no timeout.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::runner::{CommandOutput, CommandRunner, Invocation};

/// Runs helpers on the real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());

        if invocation.capture {
            let output = command.output()?;
            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = command.status()?;
            Ok(CommandOutput {
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }

    fn shell_open(&self, target: &Path) -> io::Result<()> {
        open::that(target)
    }
}
