//! CLI module containing the main entry point logic.
//!
//! The launcher interprets no flags of its own: every argument belongs to
//! the companion script. Argv is therefore forwarded raw rather than run
//! through an option parser, which would claim tokens such as a leading
//! `--` for itself.

use std::env;
use std::ffi::OsString;

use crate::config::LauncherConfig;
use crate::delegator::Delegator;

/// Main CLI logic. Returns the exit code the process should end with;
/// the caller in `main.rs` performs the actual `process::exit`.
///
/// Every failure class prints exactly one diagnostic line to stderr.
#[must_use]
pub fn run_cli() -> i32 {
    let args = forwarded_args(env::args_os());
    run_with_args(&args)
}

/// The arguments to hand the companion script: everything after the
/// program name, untouched.
fn forwarded_args<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    argv.into_iter().skip(1).map(Into::into).collect()
}

fn run_with_args(args: &[OsString]) -> i32 {
    let config = match LauncherConfig::from_install_dir() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    match Delegator::new(config).delegate(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
