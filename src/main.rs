//! # cleanrn
//!
//! Thin launcher for the bundled `cleanrn.sh` React Native cleanup script.
//!
//! ## Usage
//!
//! - Clean the current project: `cleanrn`
//! - Pass options through to the script: `cleanrn --pods --metro`
//!
//! All arguments go to the script unchanged; the launcher exits with the
//! script's own exit code.

/// Entry point for the CLI tool.
fn main() {
    std::process::exit(cleanrn::cli::run_cli());
}
