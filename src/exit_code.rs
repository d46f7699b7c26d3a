//! Exit codes used by the launcher itself.
//!
//! When the companion script runs to completion its own exit code is
//! mirrored verbatim, so the launcher's codes only cover the cases where
//! the script never produced one. Each failure class gets a distinct
//! value so callers can tell them apart from a script-reported failure.

/// Companion script absent at the resolved path (command-not-found convention).
pub const MISSING_TARGET: i32 = 127;

/// The OS refused to spawn the child, or waiting on it failed
/// (found-but-cannot-execute convention).
pub const SPAWN_FAILURE: i32 = 126;

/// The launcher could not determine its own install directory.
pub const NO_INSTALL_DIR: i32 = 125;

/// Added to the signal number when the child was killed by a signal,
/// matching the shell's `128 + signum` convention. A signalled child
/// never maps to exit 0.
pub const SIGNAL_BASE: i32 = 128;

/// Child terminated with neither an exit code nor a known signal.
pub const UNKNOWN_TERMINATION: i32 = 1;
