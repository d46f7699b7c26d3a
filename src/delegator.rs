//! Companion script delegation: spawn, wait, and exit-code mirroring.
//!
//! The launcher performs at most one blocking wait on exactly one child
//! per invocation. Process creation sits behind [`ProcessRunner`] so the
//! delegation logic is testable without touching a real OS process.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::config::LauncherConfig;
use crate::exit_code;

/// A launcher failure. Child-reported non-zero exits are not errors;
/// they are mirrored verbatim and never pass through this type.
#[derive(Debug)]
pub enum LaunchError {
    /// Companion script absent at the resolved path; nothing was spawned.
    MissingTarget(PathBuf),
    /// OS-level failure to create or wait on the child process.
    SpawnFailure(String),
    /// The launcher's own install directory could not be determined.
    InstallDir(String),
}

impl LaunchError {
    /// The exit code the launcher terminates with for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingTarget(_) => exit_code::MISSING_TARGET,
            Self::SpawnFailure(_) => exit_code::SPAWN_FAILURE,
            Self::InstallDir(_) => exit_code::NO_INSTALL_DIR,
        }
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget(path) => {
                write!(f, "Error: companion script not found at '{}'", path.display())
            }
            Self::SpawnFailure(message) => {
                write!(f, "Error: failed to run companion script: {message}")
            }
            Self::InstallDir(message) => {
                write!(f, "Error: could not locate the cleanrn executable: {message}")
            }
        }
    }
}

impl std::error::Error for LaunchError {}

/// How a finished child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal termination with an exit code.
    Code(i32),
    /// Killed by a signal; the number when the platform reports one.
    Signal(Option<i32>),
}

impl ExitOutcome {
    /// Map the child's outcome onto the launcher's own exit code.
    ///
    /// Signal termination maps to `128 + signum` rather than success,
    /// so a killed child is never mistaken for a clean run.
    #[must_use]
    pub fn as_exit_code(self) -> i32 {
        match self {
            Self::Code(code) => code,
            Self::Signal(Some(signum)) => exit_code::SIGNAL_BASE + signum,
            Self::Signal(None) => exit_code::UNKNOWN_TERMINATION,
        }
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Code(code),
            None => Self::Signal(signal_number(&status)),
        }
    }
}

#[cfg(unix)]
fn signal_number(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_number(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Narrow seam over process creation and reaping.
pub trait ProcessRunner {
    type Handle;

    /// Start the companion script with the given arguments.
    fn spawn(&self, script: &Path, args: &[OsString]) -> io::Result<Self::Handle>;

    /// Block until the child ends and report how it ended.
    fn wait(&self, handle: &mut Self::Handle) -> io::Result<ExitOutcome>;
}

/// Production runner: executes the script through `bash` with all three
/// standard streams inherited from the launcher (no capture, no buffering).
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    type Handle = Child;

    fn spawn(&self, script: &Path, args: &[OsString]) -> io::Result<Child> {
        let bash = which::which("bash").map_err(|e| {
            io::Error::new(io::ErrorKind::NotFound, format!("bash: {e}"))
        })?;

        Command::new(bash)
            .arg(script)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
    }

    fn wait(&self, handle: &mut Child) -> io::Result<ExitOutcome> {
        handle.wait().map(ExitOutcome::from)
    }
}

/// Locates, validates, and runs the companion script.
pub struct Delegator<R: ProcessRunner> {
    config: LauncherConfig,
    runner: R,
}

impl Delegator<SystemRunner> {
    #[must_use]
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: ProcessRunner> Delegator<R> {
    #[must_use]
    pub fn with_runner(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Run the companion script with `args` and report the exit code the
    /// launcher should terminate with.
    ///
    /// The existence check happens before any spawn attempt; a missing
    /// script is reported with the resolved path and spawns nothing.
    /// The wait is unbounded and ends only when the child does.
    pub fn delegate(&self, args: &[OsString]) -> Result<i32, LaunchError> {
        let script = self.config.script_path.as_path();
        if !script.exists() {
            return Err(LaunchError::MissingTarget(script.to_path_buf()));
        }

        let mut handle = self
            .runner
            .spawn(script, args)
            .map_err(|e| LaunchError::SpawnFailure(e.to_string()))?;
        let outcome = self
            .runner
            .wait(&mut handle)
            .map_err(|e| LaunchError::SpawnFailure(e.to_string()))?;

        Ok(outcome.as_exit_code())
    }
}
