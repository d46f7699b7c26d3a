//! # cleanrn
//!
//! A thin launcher for the bundled `cleanrn.sh` cleanup script. The
//! launcher resolves the script relative to its own install directory,
//! runs it through `bash` with the caller's arguments and inherited
//! standard streams, and exits with the script's own exit code.
//!
//! The script is an external collaborator: the launcher makes no
//! assumptions about its contents beyond "accepts argv, uses the three
//! standard streams, terminates with an exit code".

pub mod cli;
pub mod config;
pub mod delegator;
pub mod exit_code;
