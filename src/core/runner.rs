// open-docs - core/runner.rs
//
// Subprocess abstraction. Openers describe the helper they need as an
// `Invocation` and hand it to a `CommandRunner`; the real runner lives in
// the platform layer, `ScriptedRunner` replays canned results.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A helper program call: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    /// Capture stdout/stderr instead of inheriting the terminal.
    pub capture: bool,
}

impl Invocation {
    /// Invocation that inherits stdio.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            capture: false,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Capture the helper's output for the caller to read.
    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of a helper that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout (empty unless the invocation captured).
    pub stdout: String,
    /// Captured stderr (empty unless the invocation captured).
    pub stderr: String,
}

impl CommandOutput {
    /// Successful completion with the given stdout.
    pub fn success(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Unsuccessful completion with the given exit code and stderr.
    pub fn failure(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs helper programs to completion, blocking the caller, and hands
/// files to the OS shell association.
///
/// `Err` from `run` means the program could not be started; a program that
/// started and failed is an `Ok` with a non-zero [`CommandOutput::code`].
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;

    /// Open `target` with the application associated with its type, without
    /// going through a command interpreter.
    fn shell_open(&self, target: &Path) -> io::Result<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        (**self).run(invocation)
    }

    fn shell_open(&self, target: &Path) -> io::Result<()> {
        (**self).shell_open(target)
    }
}

/// Runner that replays queued results in order and records every call.
///
/// Lets a `Launcher` be driven on any host without spawning anything. Once
/// the queue is empty every call succeeds with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    replies: RefCell<VecDeque<io::Result<CommandOutput>>>,
    calls: RefCell<Vec<Invocation>>,
    shell_opened: RefCell<Vec<PathBuf>>,
}

impl ScriptedRunner {
    pub fn replying(replies: Vec<io::Result<CommandOutput>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            ..Self::default()
        }
    }

    /// Helper invocations seen so far.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Program names of the helper invocations seen so far.
    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }

    /// Targets handed to `shell_open` so far.
    pub fn shell_opened(&self) -> Vec<PathBuf> {
        self.shell_opened.borrow().clone()
    }

    fn next_reply(&self) -> io::Result<CommandOutput> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::success("")))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        self.next_reply()
    }

    /// Consumes one reply; a non-zero code becomes an `io::Error` carrying
    /// the reply's stderr.
    fn shell_open(&self, target: &Path) -> io::Result<()> {
        self.shell_opened.borrow_mut().push(target.to_path_buf());
        let reply = self.next_reply()?;
        if reply.is_success() {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::Other, reply.stderr))
        }
    }
}
